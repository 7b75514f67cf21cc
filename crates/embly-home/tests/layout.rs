use std::fs;
use std::path::Path;

use embly_home::{
    ErrorKind, FixedHome, Segment, ensure_application_directories_with,
    resolve_application_directory_with,
};
use tempfile::TempDir;

fn assert_layout(root: &Path) {
    for segment in Segment::ALL {
        assert!(segment.path(root).is_dir(), "{:?} missing", segment);
    }
}

#[test]
fn test_fresh_home_gets_full_layout() {
    let home = TempDir::new().unwrap();
    let user = FixedHome::new(home.path());

    let created = ensure_application_directories_with(&user).unwrap();
    assert_eq!(created.len(), 3);

    let root = resolve_application_directory_with(&user).unwrap();
    assert_eq!(root, home.path().join(".embly"));
    assert_layout(&root);
}

#[test]
fn test_missing_home_is_created() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home/alice");
    let user = FixedHome::new(&home);

    ensure_application_directories_with(&user).unwrap();
    assert_layout(&home.join(".embly"));
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let home = TempDir::new().unwrap();
    let user = FixedHome::new(home.path());

    for _ in 0..3 {
        ensure_application_directories_with(&user).unwrap();
    }
    assert!(ensure_application_directories_with(&user).unwrap().is_empty());
    assert_layout(&home.path().join(".embly"));
}

#[test]
fn test_file_in_place_of_root_blocks_cache() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".embly");
    fs::write(&root, b"").unwrap();

    let err = ensure_application_directories_with(&FixedHome::new(home.path())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirectoryCreationFailed);
    assert_eq!(err.path(), Some(root.join("cache").as_path()));
    assert!(root.is_file());
}

#[cfg(unix)]
#[test]
fn test_cache_failure_stops_before_nix() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".embly");
    fs::create_dir(&root).unwrap();
    // A dangling symlink stats as missing but cannot be created over.
    std::os::unix::fs::symlink(home.path().join("gone/target"), root.join("cache")).unwrap();

    let err = ensure_application_directories_with(&FixedHome::new(home.path())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirectoryCreationFailed);
    assert_eq!(err.path(), Some(root.join("cache").as_path()));
    assert!(root.is_dir());
    assert!(!root.join("nix").exists());
}

#[cfg(unix)]
#[test]
fn test_directories_are_world_accessible_under_umask() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    ensure_application_directories_with(&FixedHome::new(home.path())).unwrap();

    let mode = fs::metadata(home.path().join(".embly/nix"))
        .unwrap()
        .permissions()
        .mode();
    // Owner bits are never masked by a sane umask.
    assert_eq!(mode & 0o700, 0o700);
}
