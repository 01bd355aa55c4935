pub mod state;

use self::state::create_state;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::theme::{hydrated_status_colour, use_theme};
use contracts::domain::a001_order::{orders, Order, OrderStatus};
use contracts::shared::activity::initials;
use contracts::shared::config::DashboardConfig;
use contracts::shared::list_query::{unique_statuses, SortField};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not provided");
    let state = create_state(&config.orders);
    let page_size_options = config.orders.page_size_options.clone();

    // Filter -> sort -> paginate, recomputed on every input change.
    let page = Memo::new(move |_| state.with(|s| s.query.derive(orders())));

    let search_text = Signal::derive(move || state.with(|s| s.query.filters.search_text.clone()));
    let sort = Signal::derive(move || state.with(|s| s.query.sort));
    let has_active_filters =
        Signal::derive(move || state.with(|s| s.query.filters.has_active_filters()));
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));

    let user_filter = RwSignal::new(String::new());
    Effect::new(move |_| {
        let text = user_filter.get();
        let changed = state.with_untracked(|s| s.query.filters.user_text != text);
        if changed {
            state.update(|s| s.query.set_user_text(text));
        }
    });

    let on_search = move |text: String| state.update(|s| s.query.set_search_text(text));

    let toggle_sort = move |field: SortField| {
        state.update(|s| s.query.toggle_sort(field));
        log::debug!("orders: sort by {}", field.as_str());
    };

    let go_to_page = move |new_page: usize| {
        let total = page.with_untracked(|p| p.total_pages);
        state.update(|s| s.query.go_to_page(new_page, total));
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| s.query.set_page_size(new_size));
    };

    let set_status = move |status: OrderStatus, checked: bool| {
        state.update(|s| s.query.set_status(status, checked));
    };

    let clear_filters = move || {
        user_filter.set(String::new());
        state.update(|s| s.query.clear_all_filters());
    };

    let toggle_row = move |id: String| state.update(|s| s.selection.toggle(&id));

    let toggle_all = move |_: ()| {
        let visible = page.with_untracked(|p| p.visible_ids());
        state.update(|s| s.selection.toggle_all_on_page(&visible));
    };

    let header_state = Signal::derive(move || {
        let visible = page.with(|p| p.visible_ids());
        state.with(|s| s.selection.header_state(&visible))
    });

    let statuses = unique_statuses(orders());

    view! {
        <PageFrame page_id="a001_order_list--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order List"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                    <Show when=move || { selected_count.get() > 0 }>
                        <span class="page__header-note">
                            {move || format!("{} selected", selected_count.get())}
                        </span>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <div class="order-toolbar">
                    <div class="order-toolbar__left">
                        <Button appearance=ButtonAppearance::Subtle attr:title="Add order">
                            {icon("plus")}
                        </Button>
                        <div class="filter-menu">
                            <Button
                                appearance=Signal::derive(move || if has_active_filters.get() {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                })
                                on_click=move |_| state.update(|s| s.show_filters = !s.show_filters)
                                attr:title="Filters"
                            >
                                {icon("filter")}
                            </Button>

                            <Show when=move || state.with(|s| s.show_filters)>
                                <div class="filter-menu__dropdown">
                                    <div class="filter-menu__section">
                                        <Label>"Status"</Label>
                                        {statuses.iter().map(|&status| {
                                            view! {
                                                <label class="filter-menu__option">
                                                    <input
                                                        type="checkbox"
                                                        class="table__checkbox"
                                                        prop:checked=move || state.with(|s| s.query.filters.statuses.contains(&status))
                                                        on:change=move |ev| set_status(status, event_target_checked(&ev))
                                                    />
                                                    <StatusLabel status=status />
                                                </label>
                                            }
                                        }).collect_view()}
                                    </div>
                                    <div class="filter-menu__section">
                                        <Label>"User"</Label>
                                        <Input value=user_filter placeholder="Filter by user..." />
                                    </div>
                                    <Show when=move || has_active_filters.get()>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| clear_filters()
                                        >
                                            "Clear all"
                                        </Button>
                                    </Show>
                                </div>
                            </Show>
                        </div>
                    </div>

                    <SearchInput
                        value=search_text
                        on_change=Callback::new(on_search)
                        placeholder="Search"
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    state=header_state
                                    on_toggle=Callback::new(toggle_all)
                                />
                                {SortField::all().into_iter().map(|field| {
                                    view! {
                                        <SortableHeaderCell
                                            field=field
                                            sort=sort
                                            on_sort=Callback::new(toggle_sort)
                                            min_width={if field == SortField::Address { 200.0 } else { 110.0 }}
                                        />
                                    }
                                }).collect_view()}
                                <TableHeaderCell resizable=false class="fixed-action-column">""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || page.get().rows
                                key=|order| order.id.to_string()
                                children=move |order: Order| {
                                    let id = order.id.to_string();
                                    let id_for_checked = id.clone();
                                    let id_for_class = id.clone();
                                    let id_for_toggle = id.clone();
                                    let id_text = id.clone();
                                    let project = order.project.clone();
                                    let address = order.address.clone();
                                    let user_name = order.user.name.clone();
                                    let user_initials = initials(&order.user.name);
                                    let status = order.status;

                                    view! {
                                        <TableRow attr:aria-selected=move || {
                                            state.with(|s| s.selection.is_selected(&id_for_class)).to_string()
                                        }>
                                            <TableCell class="fixed-checkbox-column">
                                                <input
                                                    type="checkbox"
                                                    class="table__checkbox"
                                                    prop:checked=move || state.with(|s| s.selection.is_selected(&id_for_checked))
                                                    on:change=move |_| toggle_row(id_for_toggle.clone())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&id_text, &search_text.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="order-user">
                                                        <span class="avatar avatar--small">{user_initials}</span>
                                                        {move || highlight_matches(&user_name, &search_text.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&project, &search_text.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&address, &search_text.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="order-date">
                                                        {icon("calendar")}
                                                        {order.date.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusLabel status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="fixed-action-column">
                                                <button class="table__row-action" title="More">
                                                    {icon("more-horizontal")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || page.with(|p| p.rows.is_empty())>
                        <div class="table__empty">"No orders match the current filters"</div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.current_page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    page_size=Signal::derive(move || page.with(|p| p.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                    page_size_options=page_size_options
                />
            </div>
        </PageFrame>
    }
}

/// Coloured dot plus label of an order status.
///
/// Until hydration the colour comes from the `status-label--*` rules of the
/// stylesheet, keyed on the pre-painted `data-theme`.
#[component]
fn StatusLabel(status: OrderStatus) -> impl IntoView {
    let theme = use_theme();
    let colour = move || {
        hydrated_status_colour(status, theme.theme.get(), theme.is_hydrated.get())
    };
    let dot_style = move || {
        colour()
            .map(|c| format!("background-color: {c}"))
            .unwrap_or_default()
    };
    let text_style = move || colour().map(|c| format!("color: {c}")).unwrap_or_default();

    view! {
        <span class={format!("status-label status-label--{}", status.css_slug())}>
            <span class="status-label__dot" style=dot_style></span>
            <span class="status-label__text" style=text_style>{status.label()}</span>
        </span>
    }
}
