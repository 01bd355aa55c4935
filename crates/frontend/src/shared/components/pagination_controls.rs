use crate::shared::icons::icon;
use contracts::shared::list_query::page_window;
use leptos::prelude::*;

/// PaginationControls component - prev/next, a sliding window of page
/// buttons and the page size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (1-based, already clamped)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let default_size = page_size_options.first().copied().unwrap_or(10);

    let range_info = move || {
        let count = total_count.get();
        if count == 0 {
            return "No orders".to_string();
        }
        let size = page_size.get().max(1);
        let start = current_page.get().saturating_sub(1) * size + 1;
        let end = (start + size - 1).min(count);
        format!("{}-{} of {}", start, end, count)
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{range_info}</span>
            <div class="pagination-controls__pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn pagination-btn--page"
                                    class:pagination-btn--active={page == current}
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(default_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
