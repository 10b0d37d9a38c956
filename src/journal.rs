use crate::keys::{journal_key, DateKey};
use crate::storage::KeyValueStore;

// Journal text is stored raw under the bare date key, not JSON-encoded.

pub fn load_journal_entry<S: KeyValueStore + ?Sized>(store: &S, date: &DateKey) -> String {
    store.get(&journal_key(date)).unwrap_or_default()
}

pub fn save_journal_entry<S: KeyValueStore + ?Sized>(store: &mut S, date: &DateKey, text: &str) {
    store.set(&journal_key(date), text.to_string());
}
