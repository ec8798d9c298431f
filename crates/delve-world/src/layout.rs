use crate::chunk_coord::ChunkCoord;
use crate::grid::VoxelGrid;

/// Partition of a fixed-size grid into cubic chunks of edge `chunk_size`.
///
/// Chunks live in a dense arena indexed by `cx + cy * CX + cz * CX * CY`, so a
/// neighbor lookup is arithmetic instead of a hash. Edge chunks of grids whose
/// dimensions are not multiples of the chunk size are partial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkLayout {
    pub chunk_size: usize,
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
    grid_x: usize,
    grid_y: usize,
    grid_z: usize,
}

impl ChunkLayout {
    pub fn new(grid_dims: (usize, usize, usize), chunk_size: usize) -> Self {
        let s = chunk_size.max(1);
        Self {
            chunk_size: s,
            chunks_x: grid_dims.0.div_ceil(s),
            chunks_y: grid_dims.1.div_ceil(s),
            chunks_z: grid_dims.2.div_ceil(s),
            grid_x: grid_dims.0,
            grid_y: grid_dims.1,
            grid_z: grid_dims.2,
        }
    }

    #[inline]
    pub fn for_grid(grid: &VoxelGrid, chunk_size: usize) -> Self {
        Self::new(grid.dims(), chunk_size)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks_x * self.chunks_y * self.chunks_z
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, c: ChunkCoord) -> bool {
        c.cx >= 0
            && c.cy >= 0
            && c.cz >= 0
            && (c.cx as usize) < self.chunks_x
            && (c.cy as usize) < self.chunks_y
            && (c.cz as usize) < self.chunks_z
    }

    /// Arena slot for `c`, or `None` when the chunk does not exist.
    #[inline]
    pub fn index(&self, c: ChunkCoord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let (x, y, z) = (c.cx as usize, c.cy as usize, c.cz as usize);
        Some(x + y * self.chunks_x + z * self.chunks_x * self.chunks_y)
    }

    #[inline]
    pub fn coord_at(&self, index: usize) -> ChunkCoord {
        let plane = self.chunks_x * self.chunks_y;
        let z = index / plane;
        let rem = index % plane;
        let y = rem / self.chunks_x;
        let x = rem % self.chunks_x;
        ChunkCoord::new(x as i32, y as i32, z as i32)
    }

    /// All chunk coordinates in arena order.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        (0..self.len()).map(|i| self.coord_at(i))
    }

    /// Owning chunk and local coordinate of an in-grid cell.
    pub fn locate(&self, x: i32, y: i32, z: i32) -> Option<(ChunkCoord, (i32, i32, i32))> {
        if x < 0
            || y < 0
            || z < 0
            || x as usize >= self.grid_x
            || y as usize >= self.grid_y
            || z as usize >= self.grid_z
        {
            return None;
        }
        let coord = ChunkCoord::containing(x, y, z, self.chunk_size);
        let (ox, oy, oz) = coord.origin(self.chunk_size);
        Some((coord, (x - ox, y - oy, z - oz)))
    }

    /// The chunk's own cell range `lo..hi`, clipped to the grid.
    pub fn cell_range(&self, c: ChunkCoord) -> ((i32, i32, i32), (i32, i32, i32)) {
        let s = self.chunk_size as i32;
        let (ox, oy, oz) = c.origin(self.chunk_size);
        let hi = (
            (ox + s).min(self.grid_x as i32),
            (oy + s).min(self.grid_y as i32),
            (oz + s).min(self.grid_z as i32),
        );
        ((ox, oy, oz), hi)
    }
}
