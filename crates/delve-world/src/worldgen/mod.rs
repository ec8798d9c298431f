//! Procedural base: depth layers, weighted rolling, and the grid populator.

mod config;
mod layers;
mod populator;

pub use config::{
    Depth, LayerDef, Weights, WorldGenConfig, WorldGenParams, load_params_from_path,
};
pub use layers::{DepthRange, FALLBACK_BLOCK, Layer, LayerTable};
pub use populator::Populator;
