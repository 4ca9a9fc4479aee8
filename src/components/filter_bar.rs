//! Filter Bar Component
//!
//! Three mutually exclusive filter buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filters">
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || ctx.filter() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn is-active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
