use std::path::PathBuf;

use delve_blocks::{BlockColors, BlockType};
use delve_edit::EditTrackerStats;
use delve_io::{OverlayStore, PersistError, load_overlay, save_chunks};
use delve_mesh_cpu::{ChunkMesh, MeshStats};
use delve_world::{ChunkCoord, ChunkLayout, Populator, VoxelGrid, WorldGenParams};

use crate::config::MineConfig;
use crate::executor::WaveExecutor;
use crate::scheduler::{RebuildScheduler, WaveStats};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    pub saved: Vec<ChunkCoord>,
    pub failed: Vec<ChunkCoord>,
    /// The storage root could not be created; nothing was written.
    pub storage_unavailable: bool,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub applied: Vec<ChunkCoord>,
    pub skipped: Vec<PathBuf>,
    pub cells: usize,
    pub wave: WaveStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MineStats {
    pub dims: (usize, usize, usize),
    pub chunks: usize,
    pub solid: usize,
    pub histogram: [usize; BlockType::COUNT],
    pub edits: EditTrackerStats,
    pub mesh: MeshStats,
    pub waves: u64,
}

/// World manager: owns the grid, its chunk arena and the overlay store, and
/// is the only place edits, rebuilds and persistence are sequenced.
pub struct Mine {
    grid: VoxelGrid,
    scheduler: RebuildScheduler,
    colors: BlockColors,
    store: OverlayStore,
    executor: Box<dyn WaveExecutor>,
}

impl Mine {
    /// Rolls the mine's depth, populates a fresh grid and prepares an empty
    /// chunk arena. Nothing is meshed until the first rebuild.
    pub fn create(config: &MineConfig, executor: Box<dyn WaveExecutor>) -> Self {
        let params = WorldGenParams::from_config(&config.worldgen);
        let mut populator = Populator::new(params.layers, params.seed);
        let depth = populator.roll_depth(params.depth);
        log::info!(
            target: "worldgen",
            "mine {}x{}x{} (depth rolled from {}..={}, seed {:#x})",
            config.width,
            depth,
            config.length,
            params.depth.min,
            params.depth.max,
            params.seed
        );
        let mut grid = VoxelGrid::new(config.width, depth as usize, config.length);
        populator.populate(&mut grid);
        Self::with_grid(
            grid,
            config.chunk_size,
            BlockColors::from_config(&config.colors),
            OverlayStore::new(&config.save_dir),
            executor,
        )
    }

    /// Wraps an already populated grid.
    pub fn with_grid(
        grid: VoxelGrid,
        chunk_size: usize,
        colors: BlockColors,
        store: OverlayStore,
        executor: Box<dyn WaveExecutor>,
    ) -> Self {
        let layout = ChunkLayout::for_grid(&grid, chunk_size);
        let mut scheduler = RebuildScheduler::new(layout);
        scheduler.mark_all_dirty();
        Self {
            grid,
            scheduler,
            colors,
            store,
            executor,
        }
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn layout(&self) -> &ChunkLayout {
        self.scheduler.layout()
    }

    #[inline]
    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    #[inline]
    pub fn scheduler(&self) -> &RebuildScheduler {
        &self.scheduler
    }

    /// Sets a cell. `false` (and nothing marked) when out of the grid.
    pub fn place(&mut self, x: i32, y: i32, z: i32, ty: BlockType) -> bool {
        if !self.grid.contains(x, y, z) {
            return false;
        }
        self.grid.set(x, y, z, ty);
        self.scheduler.note_edit(x, y, z);
        true
    }

    /// Empties a cell. `false` (and nothing marked) when out of the grid.
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> bool {
        if !self.grid.contains(x, y, z) {
            return false;
        }
        self.grid.remove(x, y, z);
        self.scheduler.note_edit(x, y, z);
        true
    }

    #[inline]
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.grid.try_get(x, y, z)
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid.is_solid(x, y, z)
    }

    /// Remeshes the dirty chunks.
    pub fn rebuild(&mut self) -> WaveStats {
        self.scheduler
            .rebuild_all(&self.grid, &self.colors, self.executor.as_ref())
    }

    pub fn rebuild_everything(&mut self) -> WaveStats {
        self.scheduler.mark_all_dirty();
        self.rebuild()
    }

    /// Writes every chunk with unsaved edits. Written chunks become clean;
    /// failed ones stay unsaved so the next save retries them.
    pub fn save(&mut self) -> SaveOutcome {
        let pending = self.scheduler.tracker().unsaved_chunks();
        if pending.is_empty() {
            return SaveOutcome::default();
        }
        let report = match save_chunks(&self.store, &self.grid, self.layout(), &pending) {
            Ok(report) => report,
            Err(e) => {
                log::warn!(
                    target: "persist",
                    "save aborted, {} chunk(s) kept pending: {}",
                    pending.len(),
                    e
                );
                return SaveOutcome {
                    storage_unavailable: matches!(e, PersistError::StorageUnavailable { .. }),
                    failed: pending,
                    ..SaveOutcome::default()
                };
            }
        };
        let tracker = self.scheduler.tracker_mut();
        for &c in &report.saved {
            tracker.clear_unsaved(c);
        }
        log::info!(
            target: "persist",
            "saved {} chunk(s) to {} ({} failed)",
            report.saved.len(),
            self.store.root().display(),
            report.failed.len()
        );
        SaveOutcome {
            saved: report.saved,
            failed: report.failed.into_iter().map(|(c, _)| c).collect(),
            storage_unavailable: false,
        }
    }

    /// Full snapshot: every chunk is written, edited or not.
    pub fn save_all(&mut self) -> SaveOutcome {
        self.scheduler.tracker_mut().mark_all_unsaved();
        self.save()
    }

    /// Applies the stored overlay on top of the current grid, then runs
    /// exactly one full rebuild wave.
    pub fn load(&mut self) -> LoadOutcome {
        let layout = *self.layout();
        let mut outcome = LoadOutcome::default();
        match load_overlay(&self.store, &mut self.grid, &layout) {
            Ok(report) => {
                outcome.applied = report.applied;
                outcome.cells = report.cells;
                outcome.skipped = report.skipped.into_iter().map(|(p, _)| p).collect();
            }
            Err(e) => {
                log::warn!(target: "persist", "overlay not loaded: {}", e);
            }
        }
        let tracker = self.scheduler.tracker_mut();
        for &c in &outcome.applied {
            tracker.clear_unsaved(c);
        }
        outcome.wave = self.rebuild_everything();
        outcome
    }

    pub fn chunk_mesh(&self, c: ChunkCoord) -> Option<&ChunkMesh> {
        self.scheduler.mesh(c)
    }

    pub fn meshes(&self) -> impl Iterator<Item = &ChunkMesh> + '_ {
        self.scheduler.meshes()
    }

    pub fn stats(&self) -> MineStats {
        let mut mesh = MeshStats::default();
        for m in self.meshes() {
            mesh += m.stats();
        }
        MineStats {
            dims: self.grid.dims(),
            chunks: self.layout().len(),
            solid: self.grid.solid_count(),
            histogram: self.grid.histogram(),
            edits: self.scheduler.tracker().stats(),
            mesh,
            waves: self.scheduler.waves(),
        }
    }
}
