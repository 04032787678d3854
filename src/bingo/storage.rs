//! Key-value persistence for the card.
//!
//! The WASM module cannot reach `localStorage` from inside the worker, so
//! `BrowserStorage` keeps a local snapshot of the one entry we own and
//! journals every write. Route handlers append `flush_script()` to their
//! response and the page applies the writes when HTMX swaps it in.

use std::collections::HashMap;

/// localStorage key holding the JSON array of names.
pub const STORAGE_KEY: &str = "bingo-names";

pub trait Storage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Plain in-memory store. Used by tests and host builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingWrite {
    Set { key: String, value: String },
    Remove { key: String },
}

/// Mirror of the page's localStorage with a journal of writes not yet applied.
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage {
    snapshot: MemoryStorage,
    pending: Vec<PendingWrite>,
}

impl BrowserStorage {
    /// Start from whatever the page read out of localStorage on load.
    /// An empty string means the key was absent.
    pub fn seeded(key: &str, value: &str) -> Self {
        let mut snapshot = MemoryStorage::default();
        if !value.is_empty() {
            snapshot.save(key, value);
        }
        Self {
            snapshot,
            pending: Vec::new(),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain the journal into a `<script>` tag. Empty when nothing is pending.
    ///
    /// Only the last write per key matters, but every write is replayed in
    /// order so the page ends up in the same state as the snapshot.
    pub fn flush_script(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let mut js = String::with_capacity(256);
        js.push_str("<script>");
        for write in self.pending.drain(..) {
            match write {
                PendingWrite::Set { key, value } => {
                    js.push_str(&format!(
                        "localStorage.setItem({}, {});",
                        js_string(&key),
                        js_string(&value)
                    ));
                }
                PendingWrite::Remove { key } => {
                    js.push_str(&format!("localStorage.removeItem({});", js_string(&key)));
                }
            }
        }
        js.push_str("</script>");
        js
    }
}

impl Storage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.snapshot.load(key)
    }

    fn save(&mut self, key: &str, value: &str) {
        self.snapshot.save(key, value);
        self.pending.push(PendingWrite::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    fn remove(&mut self, key: &str) {
        self.snapshot.remove(key);
        self.pending.push(PendingWrite::Remove {
            key: key.to_string(),
        });
    }
}

/// Quote `s` as a JS string literal that is safe inside a `<script>` element.
fn js_string(s: &str) -> String {
    let quoted = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
    // `</` would end the script element early; U+2028/9 are line breaks to older JS parsers.
    quoted
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
