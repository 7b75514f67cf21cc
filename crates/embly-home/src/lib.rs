//! Locates and initializes the per-user embly directory.
//!
//! The directory lives at `~/.embly` and holds two fixed subdirectories,
//! `cache` and `nix`. Nothing is cached between calls: every operation
//! resolves the home directory again from its [`UserContext`].

mod constants;
mod error;
mod init;
mod user;

pub use constants::{
    CACHE_DIR, EMBLY_DIR, NIX_DIR, Segment, cache_dir, cache_dir_with, nix_dir, nix_dir_with,
    resolve_application_directory, resolve_application_directory_with,
};
pub use error::{Error, ErrorKind, Result};
pub use init::{ensure_application_directories, ensure_application_directories_with};
pub use user::{FixedHome, OsUser, UserContext};
