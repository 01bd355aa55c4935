//! Sortable header cell of the order table
//!
//! ```text
//! <SortableHeaderCell
//!     field=SortField::User
//!     sort=Signal::derive(move || state.with(|s| s.query.sort))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::{SortField, SortState};
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator (▲▼⇅) and reports clicks.
#[component]
pub fn SortableHeaderCell(
    /// Column to sort by
    field: SortField,

    /// Current sort state
    #[prop(into)]
    sort: Signal<SortState>,

    /// Called with `field` on click
    on_sort: Callback<SortField>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(field)
                title={format!("Sort by {}", field.header_label())}
            >
                {field.header_label()}
                <span class=move || get_sort_class(&sort.get(), field)>
                    {move || get_sort_indicator(&sort.get(), field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
