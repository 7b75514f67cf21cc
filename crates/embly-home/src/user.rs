use std::io;
use std::path::PathBuf;

/// Source of the home directory the embly directory is rooted at.
pub trait UserContext {
    fn home_dir(&self) -> io::Result<PathBuf>;
}

/// The user the current process runs as, looked up through the OS.
///
/// Uses `$HOME` when it is set and non-empty, and only falls back to the
/// passwd entry of the effective uid on unix when it is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsUser;

impl UserContext for OsUser {
    fn home_dir(&self) -> io::Result<PathBuf> {
        dirs::home_dir()
            .filter(|home| !home.as_os_str().is_empty())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Home directory not found for current user",
                )
            })
    }
}

/// A home directory supplied by the caller instead of the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHome(PathBuf);

impl FixedHome {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self(home.into())
    }
}

impl UserContext for FixedHome {
    fn home_dir(&self) -> io::Result<PathBuf> {
        if self.0.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Home directory is empty",
            ));
        }
        Ok(self.0.clone())
    }
}

impl<T: UserContext + ?Sized> UserContext for &T {
    fn home_dir(&self) -> io::Result<PathBuf> {
        (**self).home_dir()
    }
}
