use std::fs;

use tagcloud_engine::{check_output_dir, write_atomically, PersistError};
use tempfile::TempDir;

#[test]
fn missing_output_dir_is_rejected_not_created() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("nested").join("out");

    let result = check_output_dir(&new_dir);
    assert!(matches!(result, Err(PersistError::OutputDir { .. })));
    assert!(!temp.path().join("nested").exists());

    check_output_dir(temp.path()).unwrap();
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("cloud.html");

    let first = write_atomically(&target, "first").unwrap();
    assert_eq!(first, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");

    write_atomically(&target, "second").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
}

#[test]
fn write_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("site").join("cloud.html");

    let err = write_atomically(&target, "<html></html>").unwrap_err();
    assert!(matches!(err, PersistError::OutputDir { .. }));
    assert!(err.to_string().contains("site"));
    assert!(!target.exists());
    assert!(!temp.path().join("site").exists());
}

#[test]
fn no_partial_file_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let result = write_atomically(&blocker.join("cloud.html"), "data");
    assert!(matches!(result, Err(PersistError::OutputDir { .. })));
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}
