use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use delve_blocks::ColorsConfig;
use delve_world::{CHUNK_SIZE, WorldGenConfig};
use rayon::ThreadPoolBuildError;
use serde::Deserialize;

use crate::executor::{InlineExecutor, PooledExecutor, WaveExecutor};

/// Top-level mine settings (`delve.toml`).
#[derive(Clone, Debug, Deserialize)]
pub struct MineConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Mesh worker threads; `0` meshes on the calling thread.
    #[serde(default)]
    pub workers: usize,
    #[serde(default)]
    pub worldgen: WorldGenConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

fn default_width() -> usize {
    32
}
fn default_length() -> usize {
    32
}
fn default_chunk_size() -> usize {
    CHUNK_SIZE
}
fn default_save_dir() -> PathBuf {
    PathBuf::from("delve-save")
}

impl Default for MineConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            length: default_length(),
            chunk_size: default_chunk_size(),
            save_dir: default_save_dir(),
            workers: 0,
            worldgen: WorldGenConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl MineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn executor(&self) -> Result<Box<dyn WaveExecutor>, ThreadPoolBuildError> {
        if self.workers == 0 {
            Ok(Box::new(InlineExecutor))
        } else {
            Ok(Box::new(PooledExecutor::new(self.workers)?))
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<MineConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: MineConfig = toml::from_str(&s)?;
    Ok(cfg)
}
