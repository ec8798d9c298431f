use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::layers::{DepthRange, Layer, LayerTable};

/// Worldgen inputs as handed over by the economy side: depth range, layers and
/// seed. Parsed from TOML, then compiled into [`WorldGenParams`].
#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub depth: Depth,
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerDef>,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            depth: Depth::default(),
            layers: default_layers(),
        }
    }
}

fn default_seed() -> u64 {
    0x5EED_D31E
}

#[derive(Clone, Debug, Deserialize)]
pub struct Depth {
    #[serde(default = "default_depth_min")]
    pub min: u32,
    #[serde(default = "default_depth_max")]
    pub max: u32,
}
fn default_depth_min() -> u32 {
    24
}
fn default_depth_max() -> u32 {
    40
}
impl Default for Depth {
    fn default() -> Self {
        Self {
            min: default_depth_min(),
            max: default_depth_max(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LayerDef {
    pub max_depth: i32,
    #[serde(default)]
    pub weights: Weights,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Weights {
    #[serde(default)]
    pub dirt: u32,
    #[serde(default)]
    pub stone: u32,
    #[serde(default)]
    pub iron: u32,
    #[serde(default)]
    pub gold: u32,
}

impl Weights {
    pub fn to_array(self) -> [u32; 4] {
        [self.dirt, self.stone, self.iron, self.gold]
    }
}

fn default_layers() -> Vec<LayerDef> {
    let def = |max_depth, dirt, stone, iron, gold| LayerDef {
        max_depth,
        weights: Weights {
            dirt,
            stone,
            iron,
            gold,
        },
    };
    vec![
        def(4, 90, 10, 0, 0),
        def(16, 40, 55, 5, 0),
        def(i32::MAX, 10, 65, 18, 7),
    ]
}

#[derive(Clone, Debug)]
pub struct WorldGenParams {
    pub seed: u64,
    pub depth: DepthRange,
    pub layers: LayerTable,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            seed: cfg.seed,
            depth: DepthRange::new(cfg.depth.min, cfg.depth.max),
            layers: LayerTable::new(
                cfg.layers
                    .iter()
                    .map(|l| Layer::new(l.max_depth, l.weights.to_array()))
                    .collect(),
            ),
        }
    }
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(WorldGenParams::from_config(&cfg))
}
