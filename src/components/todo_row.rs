//! Todo Row Component
//!
//! Checkbox, inline-editable title, Edit and Delete buttons.

use leptos::html;
use leptos::prelude::*;
use leptos_inline_edit::{
    create_edit_signals, make_on_begin, make_on_blur, make_on_input, make_on_keydown,
};

use crate::context::use_app_context;
use crate::render::RowView;

/// A single item row
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id.clone();
    let completed = row.completed;
    let title_class = row.title_class();
    let edit = create_edit_signals(row.text.clone(), !row.editable);

    let on_commit = Callback::new({
        let id = id.clone();
        move |text: String| ctx.update_text(&id, &text)
    });

    // Focus and select the field when editing starts
    let input_ref = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if edit.is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let text = row.text;

    view! {
        <li class="todo-item" data-id=id>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle_complete(&toggle_id)
            />

            {move || if edit.is_editing() {
                view! {
                    <input
                        type="text"
                        class="todo-title editing"
                        aria-label="Edit todo"
                        node_ref=input_ref
                        prop:value=move || edit.display_text()
                        on:input=make_on_input(edit)
                        on:keydown=make_on_keydown(edit, on_commit)
                        on:blur=make_on_blur(edit, on_commit)
                    />
                }.into_any()
            } else {
                view! {
                    <div
                        class=title_class
                        role="textbox"
                        aria-label="Edit todo"
                        tabindex="0"
                        on:dblclick=make_on_begin(edit)
                    >
                        {text.clone()}
                    </div>
                }.into_any()
            }}

            <div class="todo-actions">
                <button type="button" class="icon-btn" on:click=make_on_begin(edit)>"Edit"</button>
                <button
                    type="button"
                    class="icon-btn delete"
                    on:click=move |_| ctx.delete(&delete_id)
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
