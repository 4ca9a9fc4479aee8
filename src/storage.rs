//! Persistence Adapter
//!
//! Saves the whole list as one JSON array under a single key of a
//! key-value store. `BrowserStorage` talks to `window.localStorage`;
//! `MemoryStorage` keeps entries in process for tests.

#[cfg(test)]
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use crate::models::Item;

/// Key holding the serialized list
pub const STORAGE_KEY: &str = "todos-v1";

// ========================
// Errors
// ========================

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend (no window, storage disabled)
    Unavailable(String),
    Read(String),
    /// Write rejected, e.g. quota exceeded
    Write(String),
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// ========================
// Key-Value Stores
// ========================

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite any previous value
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-process storage with a write counter
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one raw entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage that rejects every write, like a full quota
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// ========================
// Save / Load
// ========================

/// Serialize the full list under `key`
pub fn save(storage: &mut impl KeyValueStore, key: &str, items: &[Item]) -> StorageResult<()> {
    let json = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set(key, &json)
}

/// Read the list under `key`; a missing entry is an empty list
pub fn try_load(storage: &impl KeyValueStore, key: &str) -> StorageResult<Vec<Item>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    let items: Vec<Item> = serde_json::from_str(&raw).map_err(|e| StorageError::Serialize(e.to_string()))?;
    Ok(drop_invalid(items))
}

/// Like [`try_load`], but any failure yields an empty list
pub fn load(storage: &impl KeyValueStore, key: &str) -> Vec<Item> {
    try_load(storage, key).unwrap_or_else(|e| {
        tracing::info!(key, error = %e, "discarding persisted list");
        Vec::new()
    })
}

/// Remove blank items and repeated ids (first occurrence wins)
fn drop_invalid(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| !item.text.trim().is_empty() && seen.insert(item.id.clone()))
        .collect()
}
