//! Key-value storage for persisted records.
//!
//! A [`Storage`] holds string records under string keys. The stores serialize
//! their state as JSON and save it after every mutation. Two implementations
//! are provided: [`MemoryStorage`] keeps records in memory and optionally
//! enforces a quota, while [`FileStorage`] writes one JSON file per record.

use crate::error::StorageError;
use crate::model::{Palette, SwatchId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A key-value store for serialized records.
pub trait Storage {
    /// Load the record with the given key. A missing record is `None`.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save the record under the given key, replacing any previous record.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemoryData {
    records: HashMap<String, String>,
    quota: Option<usize>,
}

/// In-memory storage.
///
/// Clones share the same records. A storage with a quota rejects saves that
/// would grow the total size of keys and values beyond the quota.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(Rc<RefCell<MemoryData>>);

impl MemoryStorage {
    /// Create a new, empty storage without quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty storage with the given quota in bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self(Rc::new(RefCell::new(MemoryData {
            records: HashMap::new(),
            quota: Some(quota),
        })))
    }

    /// Get a copy of the record with the given key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().records.get(key).cloned()
    }

    /// Determine whether the storage holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().records.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.0.borrow_mut();

        if let Some(quota) = data.quota {
            let others: usize = data
                .records
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let size = key.len() + value.len();
            if quota < others + size {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    size,
                    quota,
                });
            }
        }

        data.records.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// File-based storage.
///
/// Each record is a `<key>.json` file in the storage's directory. Saves first
/// write a temporary file and then rename it into place.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a new file storage for the given directory. The directory is
    /// created on first save.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Get the directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("\"{key}\" is not a valid record key"),
            )
            .into());
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key)?;
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp_path = path.with_extension("json.tmp");
        let result = std::fs::write(&tmp_path, value.as_bytes())
            .and_then(|()| std::fs::rename(&tmp_path, &path));
        if let Err(err) = result {
            if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
                log::debug!("Failed to remove {}: {cleanup}", tmp_path.display());
            }
            return Err(err.into());
        }
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The persisted state of a palette store.
///
/// The record has the shape `{ "values": { "values": [...] }, "rows": [...],
/// "selectedColor": ... }`. Missing scale labels and selection take on their
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSnapshot {
    #[serde(flatten)]
    pub palette: Palette,
    #[serde(default)]
    pub selected_color: Option<SwatchId>,
}

impl PaletteSnapshot {
    /// Parse a snapshot from its JSON record.
    pub fn from_json(text: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render the snapshot as its JSON record.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ====================================================================================================================
