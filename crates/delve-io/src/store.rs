use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistError;
use crate::record::ChunkRecord;

const UNIT_PREFIX: &str = "chunk_";
const UNIT_EXT: &str = "toml";

/// File name of the unit for a chunk origin. Derived from the origin alone,
/// so units can be enumerated without an index.
pub fn unit_file_name(origin: [i32; 3]) -> String {
    format!(
        "{UNIT_PREFIX}{}_{}_{}.{UNIT_EXT}",
        origin[0], origin[1], origin[2]
    )
}

/// Inverse of [`unit_file_name`]; `None` for files that are not units.
pub fn parse_unit_file_name(name: &str) -> Option<[i32; 3]> {
    let stem = name
        .strip_prefix(UNIT_PREFIX)?
        .strip_suffix(UNIT_EXT)?
        .strip_suffix('.')?;
    let mut parts = stem.split('_');
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([x, y, z])
}

/// Directory of per-chunk units.
#[derive(Clone, Debug)]
pub struct OverlayStore {
    root: PathBuf,
}

impl OverlayStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn unit_path(&self, origin: [i32; 3]) -> PathBuf {
        self.root.join(unit_file_name(origin))
    }

    pub fn ensure_root(&self) -> Result<(), PersistError> {
        fs::create_dir_all(&self.root).map_err(|source| PersistError::StorageUnavailable {
            path: self.root.clone(),
            source,
        })
    }

    /// Writes one unit atomically: a sibling `.tmp` file renamed into place.
    pub fn write_unit(&self, record: &ChunkRecord) -> Result<PathBuf, PersistError> {
        let path = self.unit_path(record.origin);
        let body = record.to_toml().map_err(|e| PersistError::Encode {
            origin: record.origin,
            reason: e.to_string(),
        })?;
        let tmp_path = path.with_extension("tmp");
        let io_err = |source: io::Error| PersistError::Io {
            path: path.clone(),
            source,
        };
        fs::write(&tmp_path, body).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }
        Ok(path)
    }

    pub fn read_unit(&self, path: &Path) -> Result<ChunkRecord, PersistError> {
        let s = fs::read_to_string(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ChunkRecord::from_toml_str(&s).map_err(|e| PersistError::malformed(path, e.message()))
    }

    /// Paths of every stored unit, sorted by file name. A missing directory
    /// holds no units.
    pub fn list_units(&self) -> Result<Vec<PathBuf>, PersistError> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistError::StorageUnavailable {
                    path: self.root.clone(),
                    source,
                });
            }
        };
        let mut units: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(parse_unit_file_name)
                    .is_some()
            })
            .collect();
        units.sort();
        Ok(units)
    }
}
