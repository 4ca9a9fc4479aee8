//! Application Context
//!
//! The todo store lives in one signal provided via the Leptos Context
//! API. Components call the methods here instead of touching the
//! store directly.

use leptos::prelude::*;

use crate::models::Filter;
use crate::render::ListView;
use crate::storage::BrowserStorage;
use crate::store::TodoStore;

pub type AppStore = TodoStore<BrowserStorage>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: RwSignal<AppStore>,
    /// Current presentation, recomputed after every store change
    pub list_view: Memo<ListView>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let store = RwSignal::new(store);
        let list_view = Memo::new(move |_| store.with(|s| s.render()));
        Self { store, list_view }
    }

    /// Returns the new id, `None` when the text was blank
    pub fn add(&self, text: &str) -> Option<String> {
        self.store.try_update(|s| s.add(text)).flatten()
    }

    pub fn toggle_complete(&self, id: &str) {
        self.store.update(|s| {
            s.toggle_complete(id);
        });
    }

    pub fn update_text(&self, id: &str, text: &str) {
        self.store.update(|s| {
            s.update_text(id, text);
        });
    }

    pub fn delete(&self, id: &str) {
        self.store.update(|s| {
            s.delete(id);
        });
    }

    pub fn clear_completed(&self) {
        self.store.update(|s| {
            s.clear_completed();
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.store.update(|s| s.set_filter(filter));
    }

    pub fn filter(&self) -> Filter {
        self.store.with(|s| s.filter())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
