//! Pagination footer for the cases grid.

use leptos::prelude::*;

use crate::grid::model::GridModel;
use crate::types::case::Case;

/// "1 to 3 of 3" summary with first/previous/next/last controls.
#[component]
pub fn GridPager(grid: RwSignal<GridModel<Case>>) -> impl IntoView {
    let summary = move || {
        grid.with(|g| {
            let view = g.view();
            format!("{} to {} of {}", view.summary.from, view.summary.to, view.summary.total)
        })
    };
    let page_label = move || {
        grid.with(|g| {
            let view = g.view();
            format!("Page {} of {}", view.page + 1, view.page_count)
        })
    };
    let no_previous = move || grid.with(|g| !g.view().has_previous);
    let no_next = move || grid.with(|g| !g.view().has_next);

    view! {
        <div class="grid-pager">
            <span class="grid-pager__page-size">{move || format!("Page Size: {}", grid.with(GridModel::page_size))}</span>
            <span class="grid-pager__summary">{summary}</span>
            <button
                class="btn btn--icon"
                title="First Page"
                disabled=no_previous
                on:click=move |_| grid.update(GridModel::first_page)
            >
                "«"
            </button>
            <button
                class="btn btn--icon"
                title="Previous Page"
                disabled=no_previous
                on:click=move |_| grid.update(GridModel::previous_page)
            >
                "‹"
            </button>
            <span class="grid-pager__page">{page_label}</span>
            <button
                class="btn btn--icon"
                title="Next Page"
                disabled=no_next
                on:click=move |_| grid.update(GridModel::next_page)
            >
                "›"
            </button>
            <button
                class="btn btn--icon"
                title="Last Page"
                disabled=no_next
                on:click=move |_| grid.update(GridModel::last_page)
            >
                "»"
            </button>
        </div>
    }
}
