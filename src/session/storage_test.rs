use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::default().load(), None);
}

#[test]
fn memory_store_round_trips_credential() {
    let store = MemoryStore::default();
    store.save("abc123").unwrap();
    assert_eq!(store.load().as_deref(), Some("abc123"));
    store.clear().unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_blank_value_reads_as_absent() {
    let store = MemoryStore::with_credential("   ");
    assert_eq!(store.load(), None);
    assert_eq!(store.peek().as_deref(), Some("   "));
}
