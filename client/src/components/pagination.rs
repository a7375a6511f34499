//! Previous/next pager with a range label.

use leptos::prelude::*;

use crate::util::triage::Page;

#[component]
pub fn Pagination(#[prop(into)] page: Signal<Page>, on_prev: Callback<()>, on_next: Callback<()>) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__prev"
                disabled=move || !page.get().has_prev()
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination__range">{move || page.get().range_label()}</span>
            <button
                class="btn pagination__next"
                disabled=move || !page.get().has_next()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </nav>
    }
}
