//! Application Configuration
//!
//! Optional JSON entry in local storage (`todos-config`). Every field
//! has a default, so partial or missing config is fine.

use serde::Deserialize;

use crate::storage::{KeyValueStore, STORAGE_KEY};

/// Storage key holding the config JSON
pub const CONFIG_KEY: &str = "todos-config";

/// Upper bound for `logCapacity`
pub const MAX_LOG_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Key the list is persisted under
    pub storage_key: String,
    /// Lines kept by the rolling logger
    pub log_capacity: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse config JSON, falling back to defaults on any error
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<AppConfig>(raw)
            .map(AppConfig::normalized)
            .unwrap_or_default()
    }

    pub fn load(storage: &impl KeyValueStore) -> Self {
        match storage.get(CONFIG_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw),
            _ => Self::default(),
        }
    }

    fn normalized(mut self) -> Self {
        if self.storage_key.trim().is_empty() {
            self.storage_key = STORAGE_KEY.to_string();
        }
        if self.log_capacity == 0 {
            self.log_capacity = rolling_logger::DEFAULT_CAPACITY;
        }
        self.log_capacity = self.log_capacity.min(MAX_LOG_CAPACITY);
        self
    }
}
