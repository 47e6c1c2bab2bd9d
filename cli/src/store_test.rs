use std::time::{SystemTime, UNIX_EPOCH};

use super::*;

fn scratch(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("jobportal-cli-{name}-{}-{nanos}", std::process::id()))
        .join("credential")
}

#[test]
fn missing_file_reads_as_anonymous() {
    let store = FileStore::new(scratch("missing"));
    assert_eq!(store.load(), None);
}

#[test]
fn save_creates_parent_and_round_trips() {
    let store = FileStore::new(scratch("save"));

    store.save("abc123").unwrap();

    assert_eq!(store.load().as_deref(), Some("abc123"));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "abc123");
}

#[test]
fn clear_is_idempotent() {
    let store = FileStore::new(scratch("clear"));
    store.save("abc123").unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert_eq!(store.load(), None);
    assert!(!store.path().exists());
}

#[test]
fn whitespace_file_reads_as_anonymous() {
    let store = FileStore::new(scratch("blank"));
    store.save("  \n").unwrap();
    assert_eq!(store.load(), None);
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let store = FileStore::new(scratch("perms"));
    store.save("abc123").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn default_path_ends_in_credential_file() {
    let path = default_path();
    assert!(path.ends_with("jobportal/credential"));
}
