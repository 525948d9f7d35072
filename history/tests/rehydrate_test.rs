//! Cross-instance persistence behavior: what a fresh store sees after an
//! earlier store wrote through the same storage.

use std::rc::Rc;

use qrstudio_history::{
    HISTORY_KEY, HistoryStore, KeyValueStore, ManualClock, MemoryStore, StorageError, shared,
};

fn store_over(
    storage: &qrstudio_history::SharedStorage,
    now: i64,
) -> HistoryStore {
    let mut store =
        HistoryStore::with_clock(Rc::clone(storage), Box::new(Rc::new(ManualClock::new(now))));
    store.initialize();
    store
}

#[test]
fn recorded_entries_survive_rehydration() {
    let storage = shared(MemoryStore::new());

    let mut first = store_over(&storage, 1_000);
    first.record("a", Some("img".to_owned()));
    drop(first);

    let second = store_over(&storage, 2_000);
    assert_eq!(second.list().len(), 1);
    assert_eq!(second.list()[0].text, "a");
    assert_eq!(second.list()[0].timestamp, 1_000);
    assert_eq!(second.list()[0].image_ref.as_deref(), Some("img"));
}

#[test]
fn order_survives_rehydration() {
    let storage = shared(MemoryStore::new());

    let mut first = store_over(&storage, 1_000);
    first.record("old", None);
    first.record("new", None);
    drop(first);

    let second = store_over(&storage, 2_000);
    let texts: Vec<_> = second.list().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["new", "old"]);
}

#[test]
fn clear_then_reinitialize_yields_empty() {
    let storage = shared(MemoryStore::new());

    let mut first = store_over(&storage, 1_000);
    first.record("a", None);
    first.record("b", None);
    first.clear();
    drop(first);

    let second = store_over(&storage, 2_000);
    assert!(
        second.list().is_empty(),
        "cleared history must not resurrect on reload"
    );
}

#[test]
fn malformed_blob_rehydrates_as_empty() {
    let storage = shared(MemoryStore::new());
    storage
        .borrow_mut()
        .set(HISTORY_KEY, "{not valid json]")
        .unwrap();

    let store = store_over(&storage, 1_000);
    assert!(store.list().is_empty());

    // And the store keeps working afterwards.
    let mut store = store;
    store.record("fresh", None);
    assert_eq!(store.list().len(), 1);
}

#[test]
fn missing_key_rehydrates_as_empty() {
    let storage = shared(MemoryStore::new());
    let store = store_over(&storage, 1_000);
    assert!(store.list().is_empty());
}

/// Backend whose writes always fail, as with disabled or full storage.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("write disabled".to_owned()))
    }
}

#[test]
fn write_failures_never_reach_the_caller() {
    let storage = shared(BrokenStore);
    let mut store = store_over(&storage, 1_000);

    // None of these may panic or error; in-memory state stays authoritative.
    store.record("a", None);
    store.record("b", None);
    let id = store.list()[0].id.clone();
    store.remove(&id);
    store.clear();
    assert!(store.list().is_empty());
}
