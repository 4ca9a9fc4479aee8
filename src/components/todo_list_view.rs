//! Todo List View Component
//!
//! Draws every visible row from the current `ListView`.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || ctx.list_view.with(|list| list.rows.clone());

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=rows
                key=|row| {
                    // Any change to the row's content rebuilds it
                    (row.id.clone(), row.text.clone(), row.completed)
                }
                children=move |row| view! { <TodoRow row=row /> }
            />
        </ul>
    }
}
