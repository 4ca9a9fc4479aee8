//! Todo List Logic
//!
//! In-memory list operations. Newest items come first; lookups by id
//! are no-ops when the id is missing. Every mutating method reports
//! whether the list changed so the caller knows when to persist.

use crate::models::{Filter, Item};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Prepend a new item. Returns `None` (and changes nothing) when the
    /// trimmed text is empty or the id is already taken.
    pub fn add(&mut self, id: String, text: &str, created_at: i64) -> Option<&Item> {
        let text = text.trim();
        if text.is_empty() || self.contains(&id) {
            return None;
        }
        self.items.insert(0, Item::new(id, text.to_string(), created_at));
        self.items.first()
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| item.completed = !item.completed)
            .is_some()
    }

    /// Replace the text; empty (after trim) text removes the item
    pub fn update_text(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return self.remove(id);
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.text != text => {
                item.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop completed items, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
