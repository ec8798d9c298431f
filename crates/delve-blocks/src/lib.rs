//! Block types, cell values, and the per-type color table.
#![forbid(unsafe_code)]

pub mod colors;
pub mod types;

pub use colors::{BlockColors, ColorsConfig, FALLBACK_COLOR};
pub use types::{BlockType, Cell, ParseBlockTypeError};
