//! Voxel grid, chunk partitioning, and procedural population.
#![forbid(unsafe_code)]

mod chunk_coord;
mod grid;
mod layout;
pub mod worldgen;

pub use chunk_coord::ChunkCoord;
pub use grid::VoxelGrid;
pub use layout::ChunkLayout;
pub use worldgen::{DepthRange, Layer, LayerTable, Populator, WorldGenConfig, WorldGenParams};

/// Default chunk edge length.
pub const CHUNK_SIZE: usize = 16;
