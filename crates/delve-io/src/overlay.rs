use std::path::{Path, PathBuf};

use delve_blocks::BlockType;
use delve_world::{ChunkCoord, ChunkLayout, VoxelGrid};

use crate::error::PersistError;
use crate::record::{ChunkRecord, RECORD_VERSION};
use crate::store::OverlayStore;

/// Snapshot of the non-empty cells in one chunk's own range.
pub fn record_for_chunk(grid: &VoxelGrid, layout: &ChunkLayout, coord: ChunkCoord) -> ChunkRecord {
    let (lo, hi) = layout.cell_range(coord);
    let mut rec = ChunkRecord::new([lo.0, lo.1, lo.2]);
    for ((x, y, z), ty) in grid.solid_cells_in(lo, hi) {
        rec.push(x, y, z, ty.cell_id());
    }
    rec
}

#[derive(Debug, Default)]
pub struct SaveReport {
    pub saved: Vec<ChunkCoord>,
    pub failed: Vec<(ChunkCoord, PersistError)>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes one unit per listed chunk. Fails as a whole only when the storage
/// root cannot be created; per-chunk write failures land in the report.
pub fn save_chunks(
    store: &OverlayStore,
    grid: &VoxelGrid,
    layout: &ChunkLayout,
    coords: &[ChunkCoord],
) -> Result<SaveReport, PersistError> {
    store.ensure_root()?;
    let mut report = SaveReport::default();
    for &coord in coords {
        if !layout.contains(coord) {
            continue;
        }
        let rec = record_for_chunk(grid, layout, coord);
        match store.write_unit(&rec) {
            Ok(path) => {
                log::debug!(
                    target: "persist",
                    "saved {:?} ({} cells) to {}",
                    coord,
                    rec.entries.len(),
                    path.display()
                );
                report.saved.push(coord);
            }
            Err(e) => {
                log::warn!(target: "persist", "save of {:?} failed: {}", coord, e);
                report.failed.push((coord, e));
            }
        }
    }
    Ok(report)
}

/// Replaces the cells of the record's chunk with the stored entries.
///
/// The chunk's whole range is cleared first, so cells dug out before the save
/// stay empty. Ids that name no block type load as the default fill; entries
/// outside the grid are dropped. Returns the chunk and the number of cells
/// written. Units of any other format version are rejected untouched.
pub fn apply_record(
    grid: &mut VoxelGrid,
    layout: &ChunkLayout,
    rec: &ChunkRecord,
    path: &Path,
) -> Result<(ChunkCoord, usize), PersistError> {
    if rec.version != RECORD_VERSION {
        return Err(PersistError::malformed(
            path,
            format!("unsupported version {}", rec.version),
        ));
    }
    let origin = (rec.origin[0], rec.origin[1], rec.origin[2]);
    let coord = ChunkCoord::from_origin(origin, layout.chunk_size).ok_or_else(|| {
        PersistError::malformed(path, format!("unaligned origin {:?}", rec.origin))
    })?;
    if !layout.contains(coord) {
        return Err(PersistError::malformed(
            path,
            format!("origin {:?} outside the grid", rec.origin),
        ));
    }
    let (lo, hi) = layout.cell_range(coord);
    grid.clear_range(lo, hi);
    let mut written = 0;
    for &[x, y, z, id] in &rec.entries {
        let (Ok(x), Ok(y), Ok(z)) = (i32::try_from(x), i32::try_from(y), i32::try_from(z)) else {
            continue;
        };
        if !grid.contains(x, y, z) {
            continue;
        }
        grid.set(x, y, z, BlockType::from_persisted_id(id));
        written += 1;
    }
    Ok((coord, written))
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub applied: Vec<ChunkCoord>,
    pub skipped: Vec<(PathBuf, PersistError)>,
    pub cells: usize,
}

/// Applies every stored unit on top of the grid. Unreadable or malformed
/// units are skipped and logged; the rest still load. A missing storage root
/// loads nothing.
pub fn load_overlay(
    store: &OverlayStore,
    grid: &mut VoxelGrid,
    layout: &ChunkLayout,
) -> Result<LoadReport, PersistError> {
    let mut report = LoadReport::default();
    for path in store.list_units()? {
        let applied = store
            .read_unit(&path)
            .and_then(|rec| apply_record(grid, layout, &rec, &path));
        match applied {
            Ok((coord, cells)) => {
                report.applied.push(coord);
                report.cells += cells;
            }
            Err(e) => {
                log::warn!(target: "persist", "skipping {}: {}", path.display(), e);
                report.skipped.push((path, e));
            }
        }
    }
    log::info!(
        target: "persist",
        "loaded {} chunk(s), {} cell(s) from {} ({} skipped)",
        report.applied.len(),
        report.cells,
        store.root().display(),
        report.skipped.len()
    );
    Ok(report)
}
