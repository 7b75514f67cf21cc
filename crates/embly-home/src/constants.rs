//! Paths for the embly directory and its fixed layout under the user's home.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::user::{OsUser, UserContext};

/// Directory name for embly state under the user's home.
pub const EMBLY_DIR: &str = ".embly";

/// Subdirectory holding downloaded and build artifacts.
pub const CACHE_DIR: &str = "cache";

/// Subdirectory holding nix store data.
pub const NIX_DIR: &str = "nix";

/// The directories managed under the embly directory, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Root,
    Cache,
    Nix,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Root, Segment::Cache, Segment::Nix];

    /// Name relative to the embly directory; `None` for the directory itself.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Segment::Root => None,
            Segment::Cache => Some(CACHE_DIR),
            Segment::Nix => Some(NIX_DIR),
        }
    }

    pub fn path(self, embly_dir: &Path) -> PathBuf {
        match self.name() {
            Some(name) => embly_dir.join(name),
            None => embly_dir.to_path_buf(),
        }
    }
}

/// Returns the embly directory path (e.g. `~/.embly`).
pub fn resolve_application_directory() -> Result<PathBuf> {
    resolve_application_directory_with(&OsUser)
}

/// Returns the embly directory path under the home directory of `user`.
pub fn resolve_application_directory_with(user: &(impl UserContext + ?Sized)) -> Result<PathBuf> {
    user.home_dir()
        .map(|home| home.join(EMBLY_DIR))
        .map_err(Error::UserLookupFailed)
}

/// Returns the cache directory (e.g. `~/.embly/cache`).
pub fn cache_dir() -> Result<PathBuf> {
    cache_dir_with(&OsUser)
}

pub fn cache_dir_with(user: &(impl UserContext + ?Sized)) -> Result<PathBuf> {
    resolve_application_directory_with(user).map(|d| Segment::Cache.path(&d))
}

/// Returns the nix directory (e.g. `~/.embly/nix`).
pub fn nix_dir() -> Result<PathBuf> {
    nix_dir_with(&OsUser)
}

pub fn nix_dir_with(user: &(impl UserContext + ?Sized)) -> Result<PathBuf> {
    resolve_application_directory_with(user).map(|d| Segment::Nix.path(&d))
}
