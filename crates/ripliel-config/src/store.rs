//! Settings store capability: one contract for every host.
//!
//! Hosts persist settings differently (browser sync storage, a file, a test
//! double). The core sees only [`SettingsStore`]: read the blob, merge keys
//! into it, and hear about changes. Host detection and API differences
//! belong in the implementation, never in callers.
//!
//! Change notifications carry a [`Changes`] map with one entry per key
//! whose value actually changed, in the shape browser storage uses:
//!
//! ```json
//! { "sentenceInterval": { "oldValue": 3, "newValue": 5 } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, StoreError};

/// The raw settings blob: a JSON object.
pub type Blob = Map<String, Value>;

/// Old and new value of one changed key. `None` means absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

/// Changed keys, in key order.
pub type Changes = BTreeMap<String, Change>;

/// Callback invoked after a write that changed at least one key.
pub type Listener = Box<dyn FnMut(&Changes) + Send>;

/// Key-value settings storage.
pub trait SettingsStore {
    /// Read the whole blob. An empty store returns an empty object.
    fn get(&self) -> Result<Blob>;

    /// Merge `values` into the blob, then notify subscribers of the keys
    /// whose values changed.
    fn set(&mut self, values: &Blob) -> Result<()>;

    /// Register a change listener.
    fn subscribe(&mut self, listener: Listener);
}

/// Merge `values` into `blob`, returning what changed.
fn merge(blob: &mut Blob, values: &Blob) -> Changes {
    let mut changes = Changes::new();
    for (key, new) in values {
        let old = blob.insert(key.clone(), new.clone());
        if old.as_ref() != Some(new) {
            changes.insert(
                key.clone(),
                Change { old_value: old, new_value: Some(new.clone()) },
            );
        }
    }
    changes
}

/// Fan a change set out to every listener. Empty sets are not delivered.
fn notify(listeners: &mut [Listener], changes: &Changes) {
    if changes.is_empty() {
        return;
    }
    debug!(keys = changes.len(), listeners = listeners.len(), "settings changed");
    for listener in listeners {
        listener(changes);
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Useful for tests and for hosts without persistence.
#[derive(Default)]
pub struct MemoryStore {
    blob: Blob,
    listeners: Vec<Listener>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `blob`.
    #[must_use]
    pub fn with_blob(blob: Blob) -> Self {
        Self { blob, listeners: Vec::new() }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self) -> Result<Blob> {
        Ok(self.blob.clone())
    }

    fn set(&mut self, values: &Blob) -> Result<()> {
        let changes = merge(&mut self.blob, values);
        notify(&mut self.listeners, &changes);
        Ok(())
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// Store persisted as a pretty-printed JSON object on disk.
///
/// A missing or blank file reads as an empty blob; the file (and its
/// parent directories) are created on the first write.
pub struct JsonFileStore {
    path: PathBuf,
    listeners: Vec<Listener>,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), listeners: Vec::new() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self) -> Result<Blob> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Blob::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Blob::new());
        }
        match serde_json::from_str(&contents)? {
            Value::Object(blob) => Ok(blob),
            _ => Err(StoreError::NotAnObject),
        }
    }

    fn set(&mut self, values: &Blob) -> Result<()> {
        let mut blob = self.get()?;
        let changes = merge(&mut blob, values);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&blob)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "settings written");

        notify(&mut self.listeners, &changes);
        Ok(())
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn blob(v: Value) -> Blob {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    /// Subscribe a listener that records every change set it receives.
    fn recorder(store: &mut dyn SettingsStore) -> Arc<Mutex<Vec<Changes>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(Box::new(move |c| sink.lock().unwrap().push(c.clone())));
        seen
    }

    // ── merge ────────────────────────────────────────────────────────────

    #[test]
    fn merge_reports_only_changed_keys() {
        let mut b = blob(json!({ "enabled": true, "sentenceInterval": 3 }));
        let changes = merge(&mut b, &blob(json!({ "enabled": true, "sentenceInterval": 5 })));
        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes["sentenceInterval"],
            Change { old_value: Some(json!(3)), new_value: Some(json!(5)) }
        );
        assert_eq!(b["sentenceInterval"], json!(5));
    }

    #[test]
    fn merge_new_key_has_no_old_value() {
        let mut b = Blob::new();
        let changes = merge(&mut b, &blob(json!({ "serifFont": "times" })));
        assert_eq!(changes["serifFont"].old_value, None);
    }

    #[test]
    fn change_serializes_like_browser_storage() {
        let c = Change { old_value: Some(json!(3)), new_value: Some(json!(5)) };
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "oldValue": 3, "newValue": 5 }));
        let added = Change { old_value: None, new_value: Some(json!(true)) };
        assert_eq!(serde_json::to_value(&added).unwrap(), json!({ "newValue": true }));
    }

    // ── MemoryStore ──────────────────────────────────────────────────────

    #[test]
    fn memory_starts_empty() {
        assert!(MemoryStore::new().get().unwrap().is_empty());
    }

    #[test]
    fn memory_set_merges() {
        let mut store = MemoryStore::with_blob(blob(json!({ "enabled": true })));
        store.set(&blob(json!({ "sentenceInterval": 4 }))).unwrap();
        assert_eq!(
            Value::Object(store.get().unwrap()),
            json!({ "enabled": true, "sentenceInterval": 4 })
        );
    }

    #[test]
    fn memory_notifies_on_change() {
        let mut store = MemoryStore::new();
        let seen = recorder(&mut store);
        store.set(&blob(json!({ "enabled": false }))).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains_key("enabled"));
    }

    #[test]
    fn memory_silent_when_nothing_changes() {
        let mut store = MemoryStore::with_blob(blob(json!({ "enabled": false })));
        let seen = recorder(&mut store);
        store.set(&blob(json!({ "enabled": false }))).unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }

    // ── JsonFileStore ────────────────────────────────────────────────────

    #[test]
    fn file_missing_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.get().unwrap().is_empty());
    }

    #[test]
    fn file_blank_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "").unwrap();
        assert!(JsonFileStore::new(&path).get().unwrap().is_empty());
        fs::write(&path, " \n\t").unwrap();
        assert!(JsonFileStore::new(&path).get().unwrap().is_empty());
    }

    #[test]
    fn file_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut store = JsonFileStore::new(&path);
        store.set(&blob(json!({ "sentenceInterval": 6 }))).unwrap();
        store.set(&blob(json!({ "enabled": false }))).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            Value::Object(reopened.get().unwrap()),
            json!({ "sentenceInterval": 6, "enabled": false })
        );
    }

    #[test]
    fn file_notifies_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("s.json"));
        let seen = recorder(&mut store);
        store.set(&blob(json!({ "useSerifFont": false }))).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn file_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "[1, 2]").unwrap();
        let err = JsonFileStore::new(&path).get().unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject));
    }

    #[test]
    fn file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).get().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
