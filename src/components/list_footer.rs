//! List Footer Component
//!
//! Remaining-count readout and the clear-completed action.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <footer class="list-footer">
            <span id="items-left">{move || ctx.list_view.with(|list| list.items_left.clone())}</span>
            <button id="clear-completed" type="button" on:click=move |_| ctx.clear_completed()>
                "Clear completed"
            </button>
        </footer>
    }
}
