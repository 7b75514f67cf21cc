use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{Segment, resolve_application_directory_with};
use crate::error::{Error, Result};
use crate::user::{OsUser, UserContext};

/// Creates the embly directory and its subdirectories in the user's home directory.
pub fn ensure_application_directories() -> Result<()> {
    ensure_application_directories_with(&OsUser).map(|_| ())
}

/// Creates whatever part of the embly layout under `user`'s home is missing.
///
/// Returns the directories this call created, in creation order. Entries that
/// already exist are left untouched, whether or not they are directories.
/// Stops at the first directory that cannot be created; directories created
/// before it stay on disk.
pub fn ensure_application_directories_with(
    user: &(impl UserContext + ?Sized),
) -> Result<Vec<PathBuf>> {
    let embly_dir = resolve_application_directory_with(user)?;
    let mut created = Vec::new();

    for segment in Segment::ALL {
        let path = segment.path(&embly_dir);
        match fs::metadata(&path) {
            Ok(_) => {
                log::debug!("{} already exists", path.display());
                continue;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                log::warn!("Could not stat {}: {}, creating it", path.display(), e);
            }
        }

        create_dir(&path).map_err(|e| Error::directory_creation(&path, e))?;
        log::info!("Created {}", path.display());
        created.push(path);
    }

    Ok(created)
}

// Succeeds if the directory appears concurrently.
fn create_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path)
}
