//! Rebuild waves, worker executors and the `Mine` world manager.
#![forbid(unsafe_code)]

mod config;
mod executor;
mod mine;
mod scheduler;

pub use config::{MineConfig, load_config_from_path};
pub use executor::{InlineExecutor, JobOut, MeshJob, PooledExecutor, WaveExecutor, WaveInput};
pub use mine::{LoadOutcome, Mine, MineStats, SaveOutcome};
pub use scheduler::{Chunk, RebuildScheduler, WaveStats};
