//! Todo List App
//!
//! Main application component: input form, filters, list, footer and
//! the developer log panel.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

use crate::components::{DevLog, FilterBar, ListFooter, NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::TodoStore;

#[component]
pub fn App(config: AppConfig, log_buffer: Option<LogBuffer>) -> impl IntoView {
    let store = TodoStore::open(BrowserStorage, config.storage_key);

    // Provide context to all children
    provide_context(AppContext::new(store));
    if let Some(buffer) = log_buffer {
        provide_context(buffer);
    }

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <FilterBar />

            <TodoListView />

            <ListFooter />

            <DevLog />
        </main>
    }
}
