//! Persistence overlay: per-chunk snapshots of edited cells, stored as one
//! TOML unit per chunk and applied on top of the procedurally populated grid.
#![forbid(unsafe_code)]

mod error;
mod overlay;
mod record;
mod store;

pub use error::PersistError;
pub use overlay::{
    LoadReport, SaveReport, apply_record, load_overlay, record_for_chunk, save_chunks,
};
pub use record::{ChunkRecord, RECORD_VERSION};
pub use store::{OverlayStore, parse_unit_file_name, unit_file_name};
