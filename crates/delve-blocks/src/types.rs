use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerated block types, in stored order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BlockType {
    Dirt = 0,
    Stone = 1,
    Iron = 2,
    Gold = 3,
}

impl BlockType {
    pub const COUNT: usize = 4;
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Iron,
        BlockType::Gold,
    ];
    /// Type substituted for stored ids that do not name a real type.
    pub const DEFAULT_FILL: BlockType = BlockType::Dirt;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<BlockType> {
        Self::ALL.get(i).copied()
    }

    /// Cell value written to the grid for this type (`index + 1`; `0` is empty).
    #[inline]
    pub fn cell_id(self) -> u8 {
        self as u8 + 1
    }

    #[inline]
    pub fn from_cell_id(id: u8) -> Option<BlockType> {
        match id {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Interprets a stored id from a persisted unit.
    ///
    /// `0` and anything outside `1..=COUNT` become [`BlockType::DEFAULT_FILL`],
    /// never empty. Older saves depend on this.
    pub fn from_persisted_id(id: i64) -> BlockType {
        u8::try_from(id)
            .ok()
            .and_then(Self::from_cell_id)
            .unwrap_or(Self::DEFAULT_FILL)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Iron => "iron",
            BlockType::Gold => "gold",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBlockTypeError(pub String);

impl fmt::Display for ParseBlockTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block type '{}'", self.0)
    }
}

impl std::error::Error for ParseBlockTypeError {}

impl FromStr for BlockType {
    type Err = ParseBlockTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ParseBlockTypeError(s.to_string()))
    }
}

/// One stored grid value: `0` is empty, `k > 0` is block type `k - 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell(pub u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);

    #[inline]
    pub fn of(ty: BlockType) -> Cell {
        Cell(ty.cell_id())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn block_type(self) -> Option<BlockType> {
        BlockType::from_cell_id(self.0)
    }
}

impl From<BlockType> for Cell {
    fn from(ty: BlockType) -> Self {
        Cell::of(ty)
    }
}
