use std::time::Instant;

use crossbeam_channel::unbounded;
use delve_blocks::BlockColors;
use delve_mesh_cpu::{ChunkMesh, build_chunk_mesh};
use delve_world::{ChunkCoord, VoxelGrid};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshJob {
    pub coord: ChunkCoord,
    pub job_id: u64,
}

pub struct JobOut {
    pub coord: ChunkCoord,
    pub job_id: u64,
    pub mesh: ChunkMesh,
    pub t_mesh_ms: u32,
}

/// Read-only inputs shared by every job of one wave.
#[derive(Clone, Copy)]
pub struct WaveInput<'a> {
    pub grid: &'a VoxelGrid,
    pub chunk_size: usize,
    pub colors: &'a BlockColors,
}

fn process_mesh_job(job: MeshJob, input: WaveInput<'_>) -> JobOut {
    let t0 = Instant::now();
    let mesh = build_chunk_mesh(input.grid, job.coord, input.chunk_size, input.colors);
    JobOut {
        coord: job.coord,
        job_id: job.job_id,
        mesh,
        t_mesh_ms: t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32,
    }
}

/// Runs one rebuild wave. Implementations return only after every job has
/// finished, with exactly one output per job.
pub trait WaveExecutor: Send + Sync {
    fn run_wave(&self, input: WaveInput<'_>, jobs: Vec<MeshJob>) -> Vec<JobOut>;

    fn workers(&self) -> usize;
}

/// Meshes every chunk on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineExecutor;

impl WaveExecutor for InlineExecutor {
    fn run_wave(&self, input: WaveInput<'_>, jobs: Vec<MeshJob>) -> Vec<JobOut> {
        jobs.into_iter()
            .map(|job| process_mesh_job(job, input))
            .collect()
    }

    fn workers(&self) -> usize {
        1
    }
}

/// Fans a wave out over a rayon pool and collects results over a channel.
pub struct PooledExecutor {
    pool: ThreadPool,
    workers: usize,
}

impl PooledExecutor {
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("delve-mesh-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }
}

impl WaveExecutor for PooledExecutor {
    fn run_wave(&self, input: WaveInput<'_>, jobs: Vec<MeshJob>) -> Vec<JobOut> {
        let n = jobs.len();
        let (tx, rx) = unbounded::<JobOut>();
        self.pool.scope(|s| {
            for job in jobs {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let _ = tx.send(process_mesh_job(job, input));
                });
            }
        });
        drop(tx);
        let mut outs: Vec<JobOut> = rx.iter().take(n).collect();
        outs.sort_by_key(|o| o.job_id);
        outs
    }

    fn workers(&self) -> usize {
        self.workers
    }
}
