//! Per-chunk change tracking for edits: which chunks need remeshing and which
//! still have unsaved cell changes.
#![forbid(unsafe_code)]

use delve_world::{ChunkCoord, ChunkLayout};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTrackerStats {
    pub chunks: usize,
    pub dirty: usize,
    pub unsaved: usize,
    pub edits: u64,
}

/// Chunk-aware edit tracker over the dense chunk arena.
///
/// Two independent flag sets per chunk: `dirty` (installed geometry is stale)
/// is cleared by a rebuild wave, `unsaved` (cells differ from the last save)
/// is cleared by a successful save.
pub struct EditTracker {
    layout: ChunkLayout,
    dirty: Vec<bool>,
    unsaved: Vec<bool>,
    edits: u64,
}

impl EditTracker {
    pub fn new(layout: ChunkLayout) -> Self {
        Self {
            layout,
            dirty: vec![false; layout.len()],
            unsaved: vec![false; layout.len()],
            edits: 0,
        }
    }

    #[inline]
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    pub fn stats(&self) -> EditTrackerStats {
        EditTrackerStats {
            chunks: self.layout.len(),
            dirty: self.dirty.iter().filter(|d| **d).count(),
            unsaved: self.unsaved.iter().filter(|d| **d).count(),
            edits: self.edits,
        }
    }

    /// Chunks whose geometry an edit at `(x, y, z)` can change: the owning
    /// chunk, plus each face neighbor the cell borders (local `0` or `S - 1`
    /// on that axis). Neighbors outside the layout are skipped.
    ///
    /// The owner is the chunk containing the coordinate, so a cell past the
    /// grid edge inside a partial edge chunk still resolves to that chunk.
    /// Empty only when the containing chunk is not in the layout.
    pub fn affected_chunks(&self, x: i32, y: i32, z: i32) -> Vec<ChunkCoord> {
        let size = self.layout.chunk_size;
        let coord = ChunkCoord::containing(x, y, z, size);
        if !self.layout.contains(coord) {
            return Vec::new();
        }
        let (ox, oy, oz) = coord.origin(size);
        let (lx, ly, lz) = (x - ox, y - oy, z - oz);
        let last = size as i32 - 1;
        let mut affected = vec![coord];
        let mut push = |c: ChunkCoord| {
            if self.layout.contains(c) && !affected.contains(&c) {
                affected.push(c);
            }
        };
        if lx == 0 {
            push(coord.offset(-1, 0, 0));
        }
        if lx == last {
            push(coord.offset(1, 0, 0));
        }
        if ly == 0 {
            push(coord.offset(0, -1, 0));
        }
        if ly == last {
            push(coord.offset(0, 1, 0));
        }
        if lz == 0 {
            push(coord.offset(0, 0, -1));
        }
        if lz == last {
            push(coord.offset(0, 0, 1));
        }
        affected
    }

    /// Records a single-cell edit. Marks every affected chunk dirty and the
    /// owning chunk unsaved. Returns the chunks marked dirty.
    pub fn note_edit(&mut self, x: i32, y: i32, z: i32) -> Vec<ChunkCoord> {
        let affected = self.affected_chunks(x, y, z);
        let Some(owner) = affected.first().copied() else {
            return affected;
        };
        self.edits = self.edits.wrapping_add(1);
        for c in &affected {
            self.mark_dirty(*c);
        }
        if let Some(i) = self.layout.index(owner) {
            self.unsaved[i] = true;
        }
        affected
    }

    pub fn mark_dirty(&mut self, c: ChunkCoord) {
        if let Some(i) = self.layout.index(c) {
            self.dirty[i] = true;
        }
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty.fill(true);
    }

    pub fn mark_all_unsaved(&mut self) {
        self.unsaved.fill(true);
    }

    #[inline]
    pub fn is_dirty(&self, c: ChunkCoord) -> bool {
        self.layout.index(c).is_some_and(|i| self.dirty[i])
    }

    pub fn dirty_chunks(&self) -> Vec<ChunkCoord> {
        Self::flagged(&self.layout, &self.dirty)
    }

    pub fn unsaved_chunks(&self) -> Vec<ChunkCoord> {
        Self::flagged(&self.layout, &self.unsaved)
    }

    /// Returns every dirty chunk and clears the dirty set.
    pub fn take_dirty(&mut self) -> Vec<ChunkCoord> {
        let out = self.dirty_chunks();
        self.dirty.fill(false);
        out
    }

    pub fn clear_unsaved(&mut self, c: ChunkCoord) {
        if let Some(i) = self.layout.index(c) {
            self.unsaved[i] = false;
        }
    }

    fn flagged(layout: &ChunkLayout, flags: &[bool]) -> Vec<ChunkCoord> {
        flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(i, _)| layout.coord_at(i))
            .collect()
    }
}
