use delve_blocks::{BlockType, Cell};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::layers::{DepthRange, LayerTable};
use crate::grid::VoxelGrid;

/// Fills freshly created grids with depth-weighted random block types.
///
/// Depth is the grid `y` coordinate: row 0 is the surface.
pub struct Populator {
    layers: LayerTable,
    rng: StdRng,
}

impl Populator {
    pub fn new(layers: LayerTable, seed: u64) -> Self {
        Self::with_rng(layers, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(layers: LayerTable, rng: StdRng) -> Self {
        Self { layers, rng }
    }

    #[inline]
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// Draws the structure's overall depth once.
    pub fn roll_depth(&mut self, range: DepthRange) -> u32 {
        range.roll(&mut self.rng)
    }

    #[inline]
    pub fn roll_block(&mut self, depth: i32) -> BlockType {
        self.layers.roll(depth, &mut self.rng)
    }

    /// Overwrites every cell of `grid` with a rolled block type.
    pub fn populate(&mut self, grid: &mut VoxelGrid) {
        grid.fill_with(|_, y, _| Cell::of(self.roll_block(y)));
        log::debug!(
            target: "worldgen",
            "populated {:?} grid: {:?} cells per type",
            grid.dims(),
            grid.histogram()
        );
    }
}
