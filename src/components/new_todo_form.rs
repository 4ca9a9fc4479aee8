//! New Todo Form Component
//!
//! Text field plus Add button. Enter in the field submits too.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if ctx.add(&text).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                id="new-todo"
                type="text"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-btn" type="submit">"Add"</button>
        </form>
    }
}
