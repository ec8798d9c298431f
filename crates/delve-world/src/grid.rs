use delve_blocks::{BlockType, Cell};

/// Dense voxel storage, one [`Cell`] per coordinate.
///
/// Layout is `index = x + y * X + z * X * Y`. Every accessor takes signed
/// coordinates and treats anything outside `0 <= c < dim` as absent: writes are
/// dropped and reads report empty. There is no panicking path for bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    cells: Vec<Cell>,
}

impl VoxelGrid {
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            cells: vec![Cell::EMPTY; size_x * size_y * size_z],
        }
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.size_x, self.size_y, self.size_z)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size_x
            && (y as usize) < self.size_y
            && (z as usize) < self.size_z
    }

    #[inline]
    fn idx(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Some(x + y * self.size_x + z * self.size_x * self.size_y)
    }

    /// Raw cell at `(x, y, z)`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.idx(x, y, z).map(|i| self.cells[i])
    }

    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y, z) {
            self.cells[i] = cell;
        }
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, ty: BlockType) {
        self.set_cell(x, y, z, Cell::of(ty));
    }

    #[inline]
    pub fn remove(&mut self, x: i32, y: i32, z: i32) {
        self.set_cell(x, y, z, Cell::EMPTY);
    }

    /// Block type at `(x, y, z)`; `None` for empty or out-of-grid cells.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.cell(x, y, z).and_then(Cell::block_type)
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.try_get(x, y, z).is_some()
    }

    /// Empties every in-grid cell in `lo..hi` (exclusive upper bound).
    pub fn clear_range(&mut self, lo: (i32, i32, i32), hi: (i32, i32, i32)) {
        let (lo, hi) = self.clip(lo, hi);
        for z in lo.2..hi.2 {
            for y in lo.1..hi.1 {
                for x in lo.0..hi.0 {
                    self.remove(x, y, z);
                }
            }
        }
    }

    /// Non-empty cells in `lo..hi`, in `x`-fastest order.
    pub fn solid_cells_in(
        &self,
        lo: (i32, i32, i32),
        hi: (i32, i32, i32),
    ) -> Vec<((i32, i32, i32), BlockType)> {
        let (lo, hi) = self.clip(lo, hi);
        let mut out = Vec::new();
        for z in lo.2..hi.2 {
            for y in lo.1..hi.1 {
                for x in lo.0..hi.0 {
                    if let Some(ty) = self.try_get(x, y, z) {
                        out.push(((x, y, z), ty));
                    }
                }
            }
        }
        out
    }

    /// Overwrites every cell with the value chosen for its coordinate.
    pub fn fill_with(&mut self, mut pick: impl FnMut(i32, i32, i32) -> Cell) {
        for z in 0..self.size_z {
            for y in 0..self.size_y {
                for x in 0..self.size_x {
                    let i = x + y * self.size_x + z * self.size_x * self.size_y;
                    self.cells[i] = pick(x as i32, y as i32, z as i32);
                }
            }
        }
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Per-type cell counts, indexed by [`BlockType::index`].
    pub fn histogram(&self) -> [usize; BlockType::COUNT] {
        let mut counts = [0usize; BlockType::COUNT];
        for ty in self.cells.iter().filter_map(|c| c.block_type()) {
            counts[ty.index()] += 1;
        }
        counts
    }

    #[inline]
    fn clip(
        &self,
        lo: (i32, i32, i32),
        hi: (i32, i32, i32),
    ) -> ((i32, i32, i32), (i32, i32, i32)) {
        let cap = |v: i32, n: usize| v.clamp(0, n.min(i32::MAX as usize) as i32);
        (
            (
                cap(lo.0, self.size_x),
                cap(lo.1, self.size_y),
                cap(lo.2, self.size_z),
            ),
            (
                cap(hi.0, self.size_x),
                cap(hi.1, self.size_y),
                cap(hi.2, self.size_z),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_x_fastest_then_y_then_z() {
        let g = VoxelGrid::new(3, 4, 5);
        assert_eq!(g.idx(0, 0, 0), Some(0));
        assert_eq!(g.idx(1, 0, 0), Some(1));
        assert_eq!(g.idx(0, 1, 0), Some(3));
        assert_eq!(g.idx(0, 0, 1), Some(12));
        assert_eq!(g.idx(2, 3, 4), Some(59));
        assert_eq!(g.idx(3, 0, 0), None);
    }

    #[test]
    fn clear_range_only_touches_clipped_span() {
        let mut g = VoxelGrid::new(4, 4, 4);
        g.fill_with(|_, _, _| Cell::of(BlockType::Stone));
        g.clear_range((-2, 0, 0), (2, 2, 2));
        assert_eq!(g.solid_count(), 64 - 8);
        assert!(!g.is_solid(1, 1, 1));
        assert!(g.is_solid(2, 1, 1));
        assert!(g.is_solid(0, 2, 0));
    }

    #[test]
    fn solid_cells_in_skips_empty() {
        let mut g = VoxelGrid::new(2, 2, 2);
        g.set(1, 0, 0, BlockType::Gold);
        g.set(0, 1, 1, BlockType::Iron);
        let cells = g.solid_cells_in((0, 0, 0), (2, 2, 2));
        assert_eq!(
            cells,
            vec![((1, 0, 0), BlockType::Gold), ((0, 1, 1), BlockType::Iron)]
        );
    }
}
