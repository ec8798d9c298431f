use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PersistError {
    /// The save directory cannot be created or listed.
    StorageUnavailable { path: PathBuf, source: io::Error },
    /// A single unit could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// A stored unit exists but cannot be used.
    Malformed { path: PathBuf, reason: String },
    Encode { origin: [i32; 3], reason: String },
}

impl PersistError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PersistError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::StorageUnavailable { path, source } => {
                write!(f, "storage unavailable at {}: {}", path.display(), source)
            }
            PersistError::Io { path, source } => {
                write!(f, "io error on {}: {}", path.display(), source)
            }
            PersistError::Malformed { path, reason } => {
                write!(f, "malformed unit {}: {}", path.display(), reason)
            }
            PersistError::Encode { origin, reason } => {
                write!(f, "cannot encode chunk at {:?}: {}", origin, reason)
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::StorageUnavailable { source, .. } | PersistError::Io { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
