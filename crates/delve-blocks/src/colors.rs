use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::BlockType;

/// Conspicuous color for ids the table does not cover (magenta).
pub const FALLBACK_COLOR: [u8; 4] = [255, 0, 255, 255];

const OPAQUE_ALPHA: u8 = 255;

/// Flat color per block type, indexed by cell id. Slot 0 stands for empty and
/// is never sampled by the mesher.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockColors {
    colors: Vec<[u8; 4]>,
}

impl Default for BlockColors {
    fn default() -> Self {
        Self::from_config(&ColorsConfig::default())
    }
}

impl BlockColors {
    /// Builds a table from colors listed in type order. A short list leaves the
    /// remaining types on [`FALLBACK_COLOR`].
    pub fn from_rgb(rgb: &[[u8; 3]]) -> Self {
        let mut colors = Vec::with_capacity(rgb.len() + 1);
        colors.push([0, 0, 0, 0]);
        colors.extend(rgb.iter().map(|c| [c[0], c[1], c[2], OPAQUE_ALPHA]));
        Self { colors }
    }

    pub fn from_config(cfg: &ColorsConfig) -> Self {
        let rgb: Vec<[u8; 3]> = BlockType::ALL.iter().map(|t| cfg.rgb_for(*t)).collect();
        Self::from_rgb(&rgb)
    }

    /// Color for a raw cell id. Ids the table does not cover render as
    /// [`FALLBACK_COLOR`].
    #[inline]
    pub fn color_for(&self, cell_id: u8) -> [u8; 4] {
        if cell_id == 0 {
            return FALLBACK_COLOR;
        }
        self.colors
            .get(cell_id as usize)
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    #[inline]
    pub fn color_of(&self, ty: BlockType) -> [u8; 4] {
        self.color_for(ty.cell_id())
    }

    /// Number of block types that have an explicit color.
    pub fn covered_types(&self) -> usize {
        self.colors.len().saturating_sub(1)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ColorsConfig = toml::from_str(toml_str)?;
        Ok(Self::from_config(&cfg))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ColorsConfig {
    #[serde(default = "default_dirt")]
    pub dirt: [u8; 3],
    #[serde(default = "default_stone")]
    pub stone: [u8; 3],
    #[serde(default = "default_iron")]
    pub iron: [u8; 3],
    #[serde(default = "default_gold")]
    pub gold: [u8; 3],
}

fn default_dirt() -> [u8; 3] {
    [121, 85, 58]
}
fn default_stone() -> [u8; 3] {
    [128, 128, 128]
}
fn default_iron() -> [u8; 3] {
    [196, 160, 140]
}
fn default_gold() -> [u8; 3] {
    [240, 200, 40]
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            dirt: default_dirt(),
            stone: default_stone(),
            iron: default_iron(),
            gold: default_gold(),
        }
    }
}

impl ColorsConfig {
    pub fn rgb_for(&self, ty: BlockType) -> [u8; 3] {
        match ty {
            BlockType::Dirt => self.dirt,
            BlockType::Stone => self.stone,
            BlockType::Iron => self.iron,
            BlockType::Gold => self.gold,
        }
    }
}
