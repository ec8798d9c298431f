use serde::{Deserialize, Serialize};

/// Chunk position in chunk-grid units. The chunk's cell origin is
/// `(cx * S, cy * S, cz * S)` for edge length `S`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Chunk containing cell `(x, y, z)`.
    #[inline]
    pub fn containing(x: i32, y: i32, z: i32, size: usize) -> Self {
        let s = size as i32;
        Self::new(x.div_euclid(s), y.div_euclid(s), z.div_euclid(s))
    }

    /// Cell origin of this chunk.
    #[inline]
    pub fn origin(self, size: usize) -> (i32, i32, i32) {
        let s = size as i32;
        (self.cx * s, self.cy * s, self.cz * s)
    }

    /// Inverse of [`ChunkCoord::origin`]; `None` when the origin is not
    /// aligned to `size` on every axis.
    pub fn from_origin(origin: (i32, i32, i32), size: usize) -> Option<Self> {
        let s = size as i32;
        if s <= 0 || origin.0 % s != 0 || origin.1 % s != 0 || origin.2 % s != 0 {
            return None;
        }
        Some(Self::new(origin.0 / s, origin.1 / s, origin.2 / s))
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
