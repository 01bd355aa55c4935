use contracts::shared::config::OrderListConfig;
use contracts::shared::list_query::OrderListQuery;
use contracts::shared::selection::SelectionState;
use leptos::prelude::*;

/// Page state of the order list. Lives as long as the page is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderListState {
    pub query: OrderListQuery,
    pub selection: SelectionState,
    pub show_filters: bool,
}

impl OrderListState {
    pub fn from_config(config: &OrderListConfig) -> Self {
        Self {
            query: OrderListQuery::with_page_size(config.default_page_size),
            selection: SelectionState::from_ids(config.initial_selection.iter().cloned()),
            show_filters: false,
        }
    }
}

pub fn create_state(config: &OrderListConfig) -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::from_config(config))
}
