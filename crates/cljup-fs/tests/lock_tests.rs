use cljup_fs::{Error, RunLock};
use tempfile::TempDir;

#[test]
fn test_lock_creates_lock_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".cljup/cljup.lock");

    let _lock = RunLock::acquire(&path).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_second_lock_is_refused_while_held() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cljup.lock");

    let _held = RunLock::acquire(&path).unwrap();
    let second = RunLock::acquire(&path);

    assert!(matches!(second, Err(Error::LockHeld { .. })));
}

#[test]
fn test_lock_is_released_on_drop() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cljup.lock");

    drop(RunLock::acquire(&path).unwrap());

    assert!(RunLock::acquire(&path).is_ok());
}
