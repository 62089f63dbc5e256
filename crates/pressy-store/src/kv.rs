//! # Persistent Key-Value Store
//!
//! A thin wrapper around a directory of namespaced JSON files, mirroring
//! the dashboard's durable per-shop storage medium.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KvStore Contract                                   │
//! │                                                                         │
//! │  get(key)                                                              │
//! │  ├── file absent            ──► None (not an error)                    │
//! │  ├── file unreadable        ──► warn + None                            │
//! │  └── file fails to parse    ──► warn + DELETE FILE + None              │
//! │                                  (corruption self-heals)               │
//! │                                                                         │
//! │  set(key, value)                                                       │
//! │  ├── value serializes to null ──► behaves like remove(key)             │
//! │  │                                (storing nothing IS deletion)        │
//! │  └── write fails              ──► error! log, no raise                 │
//! │                                   (writes are best-effort)             │
//! │                                                                         │
//! │  remove(key)                                                           │
//! │  └── absent key               ──► no-op, never an error                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers treat this store as infallible and synchronous so that state
//! initialization can run unconditionally at startup; all fallibility is
//! absorbed here.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::StoreResult;

/// Namespace prefix applied to every key, invisible to callers.
///
/// Kept identical to the original dashboard's storage prefix so existing
/// data directories remain readable.
pub const DB_PREFIX: &str = "pressy_";

// =============================================================================
// KvStore
// =============================================================================

/// Directory-backed, namespaced JSON key/value store.
///
/// One `<prefix><key>.json` file per key. All operations are synchronous.
///
/// ## Usage
/// ```rust,no_run
/// use pressy_store::KvStore;
///
/// let kv = KvStore::open("./data")?;
/// kv.set("theme", &"dark");
/// let theme: Option<String> = kv.get("theme");
/// # Ok::<(), pressy_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// This is the only fallible entry point; every operation afterwards
    /// degrades instead of erroring.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(KvStore { dir })
    }

    /// Returns the on-disk path for a (namespaced) key.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{DB_PREFIX}{key}.json"))
    }

    /// Returns the data directory this store is rooted at.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// ## Returns
    /// * `Some(value)` - key present and parsed
    /// * `None` - key absent, unreadable, or corrupt
    ///
    /// A corrupt entry is deleted as a side effect, so the next `get` is a
    /// clean "absent" rather than a repeated parse failure.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read entry, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt entry, removing");
                if let Err(e) = fs::remove_file(&path) {
                    warn!(key, error = %e, "failed to remove corrupt entry");
                }
                None
            }
        }
    }

    /// Serializes `value` and writes it under `key`.
    ///
    /// A value that serializes to JSON `null` (e.g. `Option::None`) deletes
    /// the key instead: storing "nothing" is defined as deletion, not as a
    /// stored null marker.
    ///
    /// Write failures (disk full, permissions) are logged and swallowed;
    /// the in-memory state the caller holds stays authoritative for the
    /// session even if it fails to survive a restart.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                error!(key, error = %e, "failed to serialize value");
                return;
            }
        };

        if json.is_null() {
            self.remove(key);
            return;
        }

        let path = self.path_for(key);
        match serde_json::to_string(&json) {
            Ok(text) => {
                if let Err(e) = fs::write(&path, text) {
                    error!(key, error = %e, "failed to write entry");
                } else {
                    debug!(key, "wrote entry");
                }
            }
            Err(e) => error!(key, error = %e, "failed to serialize value"),
        }
    }

    /// Deletes the entry under `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(key, error = %e, "failed to remove entry");
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        price: i64,
    }

    fn open_temp() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        (dir, kv)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_dir, kv) = open_temp();
        assert_eq!(kv.get::<Record>("nothing"), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (_dir, kv) = open_temp();
        let record = Record {
            name: "BOUBOU".to_string(),
            price: 50,
        };

        kv.set("services", &record);
        assert_eq!(kv.get::<Record>("services"), Some(record));
    }

    #[test]
    fn test_set_null_deletes_the_key() {
        let (_dir, kv) = open_temp();
        kv.set("user", &Record {
            name: "Ahmed".to_string(),
            price: 0,
        });
        assert!(kv.get::<Record>("user").is_some());

        kv.set::<Option<Record>>("user", &None);
        assert_eq!(kv.get::<Record>("user"), None);
        assert!(!kv.dir().join(format!("{DB_PREFIX}user.json")).exists());
    }

    #[test]
    fn test_corrupt_entry_self_heals() {
        let (_dir, kv) = open_temp();
        let path = kv.dir().join(format!("{DB_PREFIX}orders.json"));
        std::fs::write(&path, "{not json at all").unwrap();

        // First read: corruption detected, entry removed, absent returned.
        assert_eq!(kv.get::<Record>("orders"), None);
        assert!(!path.exists());

        // Second read: a clean absent, not a re-parse of garbage.
        assert_eq!(kv.get::<Record>("orders"), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let (_dir, kv) = open_temp();
        kv.remove("never-stored");
    }

    #[test]
    fn test_keys_are_namespaced_on_disk() {
        let (_dir, kv) = open_temp();
        kv.set("theme", &"dark");
        assert!(kv.dir().join("pressy_theme.json").exists());
    }
}
