use std::io;
use std::path::{Path, PathBuf};

/// Result type for embly home directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Embly home directory error enum
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to look up current user: {0}")]
    UserLookupFailed(#[source] io::Error),
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Discriminant of [`Error`], for callers that only care about what failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UserLookupFailed,
    DirectoryCreationFailed,
}

impl Error {
    pub(crate) fn directory_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UserLookupFailed(_) => ErrorKind::UserLookupFailed,
            Error::DirectoryCreationFailed { .. } => ErrorKind::DirectoryCreationFailed,
        }
    }

    /// The directory that could not be created, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::UserLookupFailed(_) => None,
            Error::DirectoryCreationFailed { path, .. } => Some(path),
        }
    }
}
