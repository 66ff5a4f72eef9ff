//! Durable key-value storage for check marks.
//!
//! The tree renderer reads and the reducer writes through a [`CheckStore`] handle that is passed
//! down explicitly. Writes are best-effort: a store that cannot persist logs the failure and keeps
//! serving the value from memory, so the checklist never stops working because of the disk.

use crate::error::StoreError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String-keyed store of check marks, surviving across sessions where the backend allows.
pub trait CheckStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Records `value` under `key`. Never fails; persistence problems are logged.
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Default, Debug, Clone)]
/// In-memory store, used when nothing should touch the disk.
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// All stored entries, ordered by key.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl CheckStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a JSON object on disk, rewritten on every change.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    /// The file on disk could not be parsed and must be moved aside before the first write.
    backup_pending: bool,
}

impl FileStore {
    #[must_use]
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. Entries whose value is not a string are skipped, except
    /// booleans, which are kept as `"true"`/`"false"`. A file that is not a JSON object at all is
    /// treated as empty and renamed to `<path>.bak` before it is first overwritten. An unreadable
    /// file is logged and also treated as empty.
    pub fn open(path: &Path) -> Self {
        let mut backup_pending = false;
        let entries = match Self::read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                backup_pending = matches!(e, StoreError::Parse(_));
                warn!(path = %path.display(), error = %e, "check store unavailable, starting empty");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "opened check store");
        Self {
            path: path.to_path_buf(),
            entries,
            backup_pending,
        }
    }

    #[must_use]
    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    /// Where an unparseable store file is moved before being replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let raw: BTreeMap<String, Value> = serde_json::from_str(&contents)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(value) => Some((key, value)),
                Value::Bool(checked) => Some((key, checked.to_string())),
                other => {
                    warn!(
                        path = %path.display(),
                        key = %key,
                        value = %other,
                        "skipping non-string check mark"
                    );
                    None
                }
            })
            .collect())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if self.backup_pending {
            let backup = self.backup_path();
            match fs::rename(&self.path, &backup) {
                Ok(()) => warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "moved unparseable check store aside"
                ),
                // Nothing left to preserve.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            self.backup_pending = false;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CheckStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            warn!(path = %self.path.display(), key, error = %e, "failed to persist check mark");
        }
    }
}

#[must_use]
/// Default location of the check store: the platform data directory, else the working directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".syllabus-checks.json"),
        |dir| dir.join("syllabus").join("checks.json"),
    )
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
