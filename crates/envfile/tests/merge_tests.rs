//! On-disk merge tests.
//!
//! Exercises [`vault2env_envfile::merge`] against real files in a temporary
//! directory, covering the overwrite, conflict and export rules.

use std::collections::BTreeMap;
use std::path::Path;

use tempfile::TempDir;
use vault2env_envfile::{LocalEnvFile, MemoryEnv, MergeError, MergePolicy, merge};

fn secrets(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_new_file_is_written_exactly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    let mut sink = MemoryEnv::new();
    let policy = MergePolicy {
        pollute: true,
        ..MergePolicy::default()
    };

    let outcome = merge(
        &secrets(&[("A", "1")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut sink,
    )
    .unwrap();

    assert_eq!(read(&path), "A=1");
    assert_eq!(outcome.added, vec!["A"]);
    assert_eq!(sink.get("A"), Some("1"));
    assert_eq!(sink.vars().len(), 1);
}

#[test]
fn test_keys_written_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");

    merge(
        &secrets(&[("ZED", "z"), ("ALPHA", "a"), ("MID", "m=n")]),
        MergePolicy::default(),
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap();

    assert_eq!(read(&path), "ALPHA=a\nMID=m=n\nZED=z");
}

#[test]
fn test_existing_file_without_force_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=0\n").unwrap();
    let mut sink = MemoryEnv::new();
    let policy = MergePolicy {
        pollute: true,
        ..MergePolicy::default()
    };

    let err = merge(
        &secrets(&[("A", "1")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, MergeError::FileExists { .. }));
    assert_eq!(
        err.to_string(),
        format!("{} file already exists, use --force to overwrite.", path.display())
    );
    assert_eq!(read(&path), "A=0\n");
    assert!(sink.is_empty());
}

#[test]
fn test_force_overwrites_existing_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=0").unwrap();
    let policy = MergePolicy {
        force: true,
        ..MergePolicy::default()
    };

    let outcome = merge(
        &secrets(&[("A", "1")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap();

    assert_eq!(read(&path), "A=1");
    assert_eq!(outcome.overwritten, vec!["A"]);
}

#[test]
fn test_force_keeps_unrelated_lines_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "# app settings\nPORT=8080\nDB_PASSWORD=old\n\nexport X=1\n").unwrap();
    let policy = MergePolicy {
        force: true,
        ..MergePolicy::default()
    };

    merge(
        &secrets(&[("DB_PASSWORD", "new"), ("API_KEY", "k")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap();

    assert_eq!(
        read(&path),
        "# app settings\nPORT=8080\nDB_PASSWORD=new\n\nexport X=1\nAPI_KEY=k"
    );
}

#[test]
fn test_merge_without_force_rejects_differing_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=0\nB=2").unwrap();
    let policy = MergePolicy {
        merge: true,
        ..MergePolicy::default()
    };

    let err = merge(
        &secrets(&[("A", "1"), ("B", "2")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap_err();

    match err {
        MergeError::KeyConflict { keys, .. } => assert_eq!(keys, vec!["A"]),
        other => panic!("expected KeyConflict, got {other:?}"),
    }
    assert_eq!(read(&path), "A=0\nB=2");
}

#[test]
fn test_merge_adds_new_keys_to_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "PORT=8080\nA=1\n").unwrap();
    let policy = MergePolicy {
        merge: true,
        ..MergePolicy::default()
    };

    let outcome = merge(
        &secrets(&[("A", "1"), ("B", "2")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap();

    assert_eq!(read(&path), "PORT=8080\nA=1\nB=2");
    assert_eq!(outcome.added, vec!["B"]);
    assert_eq!(outcome.unchanged, vec!["A"]);
}

#[test]
fn test_empty_existing_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "").unwrap();

    merge(
        &secrets(&[("A", "1")]),
        MergePolicy::default(),
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap();

    assert_eq!(read(&path), "A=1");
}

#[test]
fn test_empty_secret_set_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");

    let err = merge(
        &BTreeMap::new(),
        MergePolicy::default(),
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "No secrets to write!");
    assert!(!path.exists());
}

#[test]
fn test_unwritable_target_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join(".env");
    let mut sink = MemoryEnv::new();
    let policy = MergePolicy {
        pollute: true,
        ..MergePolicy::default()
    };

    let err = merge(
        &secrets(&[("A", "1")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, MergeError::Io { .. }));
    assert!(sink.is_empty());
}

#[test]
fn test_merge_rejects_differing_earlier_duplicate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=1\nA=2").unwrap();
    let policy = MergePolicy {
        merge: true,
        ..MergePolicy::default()
    };

    let err = merge(
        &secrets(&[("A", "2")]),
        policy,
        &LocalEnvFile::new(&path),
        &mut MemoryEnv::new(),
    )
    .unwrap_err();

    assert!(matches!(err, MergeError::KeyConflict { .. }));
    assert_eq!(read(&path), "A=1\nA=2");
}
