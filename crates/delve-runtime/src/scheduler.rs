use std::time::{Duration, Instant};

use delve_blocks::BlockColors;
use delve_edit::EditTracker;
use delve_mesh_cpu::{ChunkMesh, MeshStats};
use delve_world::{ChunkCoord, ChunkLayout, VoxelGrid};

use crate::executor::{MeshJob, WaveExecutor, WaveInput};

/// Arena slot for one chunk. `mesh` is `None` until the first wave that
/// covers the chunk installs it.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub mesh: Option<ChunkMesh>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaveStats {
    pub wave: u64,
    pub chunks: usize,
    pub mesh: MeshStats,
    pub elapsed: Duration,
}

/// Owns the dense chunk arena and the dirty/unsaved tracker, and turns dirty
/// chunks into installed geometry one wave at a time.
pub struct RebuildScheduler {
    layout: ChunkLayout,
    chunks: Vec<Chunk>,
    tracker: EditTracker,
    next_job_id: u64,
    waves: u64,
}

impl RebuildScheduler {
    pub fn new(layout: ChunkLayout) -> Self {
        let chunks = layout
            .coords()
            .map(|coord| Chunk { coord, mesh: None })
            .collect();
        Self {
            layout,
            chunks,
            tracker: EditTracker::new(layout),
            next_job_id: 0,
            waves: 0,
        }
    }

    #[inline]
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    #[inline]
    pub fn tracker(&self) -> &EditTracker {
        &self.tracker
    }

    #[inline]
    pub fn tracker_mut(&mut self) -> &mut EditTracker {
        &mut self.tracker
    }

    /// Completed waves so far.
    #[inline]
    pub fn waves(&self) -> u64 {
        self.waves
    }

    pub fn note_edit(&mut self, x: i32, y: i32, z: i32) -> Vec<ChunkCoord> {
        self.tracker.note_edit(x, y, z)
    }

    pub fn mark_all_dirty(&mut self) {
        self.tracker.mark_all_dirty();
    }

    pub fn chunk(&self, c: ChunkCoord) -> Option<&Chunk> {
        self.layout.index(c).map(|i| &self.chunks[i])
    }

    pub fn mesh(&self, c: ChunkCoord) -> Option<&ChunkMesh> {
        self.chunk(c).and_then(|ch| ch.mesh.as_ref())
    }

    pub fn meshes(&self) -> impl Iterator<Item = &ChunkMesh> + '_ {
        self.chunks.iter().filter_map(|ch| ch.mesh.as_ref())
    }

    /// Meshes every dirty chunk and installs the results. All jobs finish
    /// before anything is installed; afterwards no chunk is dirty.
    pub fn rebuild_all(
        &mut self,
        grid: &VoxelGrid,
        colors: &BlockColors,
        executor: &dyn WaveExecutor,
    ) -> WaveStats {
        let dirty = self.tracker.take_dirty();
        if dirty.is_empty() {
            return WaveStats {
                wave: self.waves,
                ..WaveStats::default()
            };
        }
        let t0 = Instant::now();
        let jobs: Vec<MeshJob> = dirty
            .into_iter()
            .map(|coord| {
                let job_id = self.next_job_id;
                self.next_job_id += 1;
                MeshJob { coord, job_id }
            })
            .collect();
        let input = WaveInput {
            grid,
            chunk_size: self.layout.chunk_size,
            colors,
        };
        let outs = executor.run_wave(input, jobs);

        self.waves += 1;
        let mut stats = WaveStats {
            wave: self.waves,
            ..WaveStats::default()
        };
        for out in outs {
            let Some(i) = self.layout.index(out.coord) else {
                continue;
            };
            stats.chunks += 1;
            stats.mesh += out.mesh.stats();
            self.chunks[i].mesh = Some(out.mesh);
        }
        stats.elapsed = t0.elapsed();
        log::debug!(
            target: "rebuild",
            "wave {}: {} chunk(s), {} quads on {} worker(s) in {:?}",
            stats.wave,
            stats.chunks,
            stats.mesh.quads,
            executor.workers(),
            stats.elapsed
        );
        stats
    }
}
