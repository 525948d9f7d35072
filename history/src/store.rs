//! The history store itself: ordering, dedup, eviction, persistence.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::{Clock, SystemClock};
use crate::entry::HistoryEntry;
use crate::storage::SharedStorage;

/// Storage key the serialized history lives under.
pub const HISTORY_KEY: &str = "qr-code-history";

/// Maximum number of entries kept. Recording beyond this evicts from the
/// tail, i.e. the least recently touched entries.
pub const HISTORY_CAPACITY: usize = 50;

/// Process-wide sequence for entry ids. The timestamp alone is not unique
/// when two scans land in the same millisecond.
static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_entry_id(now_millis: i64) -> String {
    let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{now_millis}-{seq}")
}

/// Ordered list of past scan results, most recently touched first.
///
/// Invariants, all maintained by [`record`](Self::record):
/// - at most one entry per distinct `text`;
/// - never more than [`HISTORY_CAPACITY`] entries;
/// - order is strictly by recency of last touch;
/// - blank text is never stored.
///
/// The store is a best-effort cache, not a system of record: every mutation
/// tries to write the list back to storage, and any failure is logged and
/// swallowed. The in-memory list stays authoritative for the session.
///
/// Mutations are accepted before [`initialize`](Self::initialize) has run;
/// they update the in-memory list so the UI reflects them immediately, but
/// the write-back is suppressed until rehydration has completed. Otherwise a
/// scan racing app startup could overwrite the persisted history with a
/// single-entry list.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    ready: bool,
    storage: SharedStorage,
    clock: Box<dyn Clock>,
}

impl HistoryStore {
    /// A store over `storage`, timestamping with the system clock. Call
    /// [`initialize`](Self::initialize) before relying on its contents.
    pub fn new(storage: SharedStorage) -> Self {
        Self::with_clock(storage, Box::new(SystemClock))
    }

    /// A store with an explicit clock, for tests.
    pub fn with_clock(storage: SharedStorage, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            ready: false,
            storage,
            clock,
        }
    }

    /// Rehydrate from persisted storage.
    ///
    /// Missing, malformed or unreadable data all yield an empty history; the
    /// failure is logged, never surfaced. Afterwards the store is `ready` and
    /// mutations start writing back. Entries recorded before this call win
    /// over the persisted list (rehydration only fills an empty list).
    pub fn initialize(&mut self) {
        match self.read_persisted() {
            Some(Ok(entries)) => {
                if self.entries.is_empty() {
                    self.entries = entries;
                } else {
                    log::debug!(
                        "history already has {} pre-init entries, keeping them",
                        self.entries.len()
                    );
                }
            }
            Some(Err(err)) => {
                log::warn!("persisted history is malformed, starting empty: {err}");
            }
            None => {}
        }
        self.ready = true;
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record a scan result.
    ///
    /// Blank text is ignored. If `text` is already present the existing entry
    /// keeps its id, gets the current timestamp, moves to the front, and
    /// takes `image_ref` only when one is supplied (an absent `image_ref`
    /// preserves the previous one). Otherwise a new entry is inserted at the
    /// front and the tail is truncated to capacity.
    ///
    /// Never fails from the caller's perspective.
    pub fn record(&mut self, text: &str, image_ref: Option<String>) {
        if text.trim().is_empty() {
            return;
        }
        let now = self.clock.now_millis();
        if let Some(pos) = self.entries.iter().position(|e| e.text == text) {
            let mut entry = self.entries.remove(pos);
            entry.timestamp = now;
            if image_ref.is_some() {
                entry.image_ref = image_ref;
            }
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(
                0,
                HistoryEntry {
                    id: next_entry_id(now),
                    text: text.to_owned(),
                    timestamp: now,
                    image_ref,
                },
            );
            self.entries.truncate(HISTORY_CAPACITY);
        }
        self.persist();
    }

    /// Remove the entry with `id`. Unknown ids are a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
        self.persist();
    }

    /// Drop every entry and persist the empty list.
    ///
    /// The empty list is written out rather than skipped or the key deleted:
    /// a stale non-empty blob left behind would resurrect cleared entries on
    /// the next [`initialize`](Self::initialize).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Current entries, most recently touched first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn read_persisted(&self) -> Option<Result<Vec<HistoryEntry>, serde_json::Error>> {
        let raw = self.storage.borrow().get(HISTORY_KEY)?;
        Some(serde_json::from_str(&raw))
    }

    fn persist(&mut self) {
        if !self.ready {
            log::trace!("history not initialized yet, skipping write-back");
            return;
        }
        let blob = match serde_json::to_string(&self.entries) {
            Ok(blob) => blob,
            Err(err) => {
                log::warn!("failed to serialize history: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.borrow_mut().set(HISTORY_KEY, &blob) {
            log::warn!("failed to persist history: {err}");
        }
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::{MemoryStore, shared};

    fn test_store() -> (HistoryStore, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new(1_000));
        let mut store =
            HistoryStore::with_clock(shared(MemoryStore::new()), Box::new(Rc::clone(&clock)));
        store.initialize();
        (store, clock)
    }

    fn texts(store: &HistoryStore) -> Vec<&str> {
        store.list().iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_record_appends_to_front() {
        let (mut store, clock) = test_store();
        store.record("first", None);
        clock.advance(1);
        store.record("second", None);
        assert_eq!(texts(&store), vec!["second", "first"]);
    }

    #[test]
    fn test_dedup_same_text_yields_one_entry() {
        let (mut store, clock) = test_store();
        store.record("hello", None);
        let first_ts = store.list()[0].timestamp;
        clock.advance(500);
        store.record("hello", None);
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].timestamp, first_ts + 500);
    }

    #[test]
    fn test_dedup_keeps_entry_id() {
        let (mut store, clock) = test_store();
        store.record("hello", None);
        let id = store.list()[0].id.clone();
        clock.advance(1);
        store.record("hello", None);
        assert_eq!(store.list()[0].id, id);
    }

    #[test]
    fn test_recency_reorder_on_re_record() {
        let (mut store, clock) = test_store();
        store.record("s1", None);
        clock.advance(1);
        store.record("s2", None);
        clock.advance(1);
        store.record("s1", None);
        assert_eq!(texts(&store), vec!["s1", "s2"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let (mut store, clock) = test_store();
        for i in 0..=HISTORY_CAPACITY {
            store.record(&format!("text-{i}"), None);
            clock.advance(1);
        }
        assert_eq!(store.list().len(), HISTORY_CAPACITY);
        // The very first recorded text fell off the tail.
        assert_eq!(store.list()[0].text, format!("text-{HISTORY_CAPACITY}"));
        assert!(!store.list().iter().any(|e| e.text == "text-0"));
    }

    #[test]
    fn test_blank_text_is_not_recorded() {
        let (mut store, _clock) = test_store();
        store.record("kept", None);
        store.record("", None);
        store.record("   ", None);
        store.record("\t\n", None);
        assert_eq!(texts(&store), vec!["kept"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut store, _clock) = test_store();
        store.record("a", None);
        store.record("b", None);
        let id = store.list()[1].id.clone();
        store.remove(&id);
        assert_eq!(texts(&store), vec!["b"]);
        store.remove(&id);
        assert_eq!(texts(&store), vec!["b"]);
        store.remove("no-such-id");
        assert_eq!(texts(&store), vec!["b"]);
    }

    #[test]
    fn test_clear_empties_list() {
        let (mut store, _clock) = test_store();
        store.record("a", None);
        store.record("b", None);
        store.clear();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_image_ref_updated_and_preserved() {
        // record("hello", imgA), record("world"), record("hello", imgB)
        // must yield [hello/imgB, world] with a single hello entry.
        let (mut store, clock) = test_store();
        store.record("hello", Some("imgA".to_owned()));
        clock.advance(1);
        store.record("world", None);
        clock.advance(1);
        store.record("hello", Some("imgB".to_owned()));
        assert_eq!(texts(&store), vec!["hello", "world"]);
        assert_eq!(store.list()[0].image_ref.as_deref(), Some("imgB"));

        // Re-recording without an image keeps the previous reference.
        clock.advance(1);
        store.record("hello", None);
        assert_eq!(store.list()[0].image_ref.as_deref(), Some("imgB"));
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let (mut store, _clock) = test_store();
        store.record("a", None);
        store.record("b", None);
        store.record("c", None);
        let mut ids: Vec<_> = store.list().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3, "same-millisecond ids must not collide");
    }

    #[test]
    fn test_mutations_before_initialize_do_not_write_back() {
        let storage = shared(MemoryStore::new());
        let mut store = HistoryStore::with_clock(
            Rc::clone(&storage),
            Box::new(Rc::new(ManualClock::new(1_000))),
        );
        store.record("early", None);
        // In-memory state reflects the record immediately...
        assert_eq!(texts(&store), vec!["early"]);
        // ...but nothing was written: rehydration has not run yet.
        assert_eq!(storage.borrow().get(HISTORY_KEY), None);

        store.initialize();
        assert_eq!(texts(&store), vec!["early"], "pre-init entries survive initialize");
        store.record("late", None);
        assert!(storage.borrow().get(HISTORY_KEY).is_some());
    }
}
