//! Todo Store
//!
//! Owns the list, the active filter and the persistence adapter. Every
//! list mutation that changes something is written back to storage;
//! the UI re-renders from the store after each call.

use chrono::Utc;

use crate::ident;
use crate::models::{Filter, Item};
use crate::render::{render, ListView};
use crate::storage::{self, KeyValueStore};
use crate::todos::TodoList;

pub struct TodoStore<S: KeyValueStore> {
    list: TodoList,
    filter: Filter,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the list persisted under `key`. Unreadable data starts empty.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = storage::load(&storage, &key);
        tracing::info!(key = %key, count = items.len(), "loaded todo list");
        Self {
            list: TodoList::from_items(items),
            filter: Filter::default(),
            storage,
            key,
        }
    }

    fn persist(&mut self) {
        // Best effort: in-memory state stays authoritative
        if let Err(e) = storage::save(&mut self.storage, &self.key, self.list.items()) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist todo list");
        }
    }

    fn persist_if(&mut self, changed: bool) -> bool {
        if changed {
            self.persist();
        }
        changed
    }

    /// Add an item with trimmed `text`; returns the new id
    pub fn add(&mut self, text: &str) -> Option<String> {
        let now = Utc::now().timestamp_millis();
        let id = ident::generate_unique_id(now, |candidate| self.list.contains(candidate));
        let added = self.list.add(id, text, now).map(|item| item.id.clone());
        if let Some(id) = &added {
            tracing::debug!(id = %id, "added item");
            self.persist();
        }
        added
    }

    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let changed = self.list.toggle(id);
        self.persist_if(changed)
    }

    /// Empty text deletes the item
    pub fn update_text(&mut self, id: &str, text: &str) -> bool {
        let changed = self.list.update_text(id, text);
        self.persist_if(changed)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let changed = self.list.remove(id);
        self.persist_if(changed)
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = self.list.clear_completed();
        if removed > 0 {
            tracing::debug!(removed, "cleared completed items");
            self.persist();
        }
        removed
    }

    /// View state only, never persisted
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn filtered_items(&self) -> Vec<&Item> {
        self.list.filtered(self.filter)
    }

    pub fn remaining_count(&self) -> usize {
        self.list.remaining()
    }

    /// Presentation of the current filtered list
    pub fn render(&self) -> ListView {
        render(&self.filtered_items(), self.remaining_count())
    }

}

#[cfg(test)]
impl<S: KeyValueStore> TodoStore<S> {
    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
