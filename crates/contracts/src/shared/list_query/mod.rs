//! Client-side order list derivation: filter, then sort, then paginate.
//!
//! [`derive`] is a pure function over plain input state. [`OrderListQuery`]
//! bundles the three inputs and applies the reset rules on every change:
//! filters, sort and page size send the user back to page 1, navigation is
//! clamped to the available pages.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter_orders, unique_statuses, FilterState};
pub use paginate::{
    page_slice, page_window, total_pages, PaginationState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use sort::{collate, sort_orders, FieldComparator, SortDirection, SortField, SortState};

use crate::domain::a001_order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// One rendered page of the order table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    pub rows: Vec<Order>,
    /// Rows left after filtering.
    pub total_count: usize,
    /// Always at least 1, an empty result is one empty page.
    pub total_pages: usize,
    /// Requested page clamped into `[1, total_pages]`.
    pub current_page: usize,
    pub page_size: usize,
}

impl ListPage {
    pub fn visible_ids(&self) -> Vec<String> {
        self.rows.iter().map(|o| o.id.to_string()).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Filter, sort and paginate `dataset`.
pub fn derive(
    dataset: &[Order],
    filters: &FilterState,
    sort: &SortState,
    pagination: &PaginationState,
) -> ListPage {
    let mut rows = filter_orders(dataset, filters);
    sort_orders(&mut rows, sort);

    let total_count = rows.len();
    let total_pages = total_pages(total_count, pagination.page_size);

    let mut effective = *pagination;
    effective.page_size = effective.page_size.max(1);
    effective.clamp(total_pages);

    ListPage {
        rows: page_slice(&rows, &effective)
            .iter()
            .map(|order| (*order).clone())
            .collect(),
        total_count,
        total_pages,
        current_page: effective.current_page,
        page_size: effective.page_size,
    }
}

/// Order list input state with the page-reset rules applied on each setter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub filters: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
}

impl OrderListQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Default::default()
        }
    }

    pub fn derive(&self, dataset: &[Order]) -> ListPage {
        derive(dataset, &self.filters, &self.sort, &self.pagination)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.search_text = text.into();
        self.pagination.reset();
    }

    pub fn set_user_text(&mut self, text: impl Into<String>) {
        self.filters.user_text = text.into();
        self.pagination.reset();
    }

    /// Status checkbox in the filter menu.
    pub fn set_status(&mut self, status: OrderStatus, checked: bool) {
        if checked {
            self.filters.statuses.insert(status);
        } else {
            self.filters.statuses.remove(&status);
        }
        self.pagination.reset();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.pagination.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.reset();
    }

    /// "Clear all" in the filter menu, also clears the search box.
    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
        self.pagination.reset();
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.pagination.current_page = page;
        self.pagination.clamp(total_pages);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.pagination.current_page + 1, total_pages);
    }

    pub fn prev_page(&mut self, total_pages: usize) {
        self.go_to_page(self.pagination.current_page.saturating_sub(1), total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::orders;

    fn ids(page: &ListPage) -> Vec<&str> {
        page.rows.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_two_pages_of_five() {
        let mut query = OrderListQuery::with_page_size(5);
        let page = query.derive(orders());
        assert_eq!(page.total_count, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(ids(&page), vec!["#CM9801", "#CM9802", "#CM9803", "#CM9804", "#CM9805"]);
        assert!(!page.has_prev());
        assert!(page.has_next());

        query.next_page(page.total_pages);
        let page = query.derive(orders());
        assert_eq!(page.current_page, 2);
        assert_eq!(ids(&page), vec!["#CM9806", "#CM9807", "#CM9808", "#CM9809", "#CM9810"]);
        assert!(!page.has_next());
    }

    #[test]
    fn test_search_resets_page() {
        let mut query = OrderListQuery::with_page_size(5);
        query.pagination.current_page = 5;
        query.set_search_text("x");
        assert_eq!(query.pagination.current_page, 1);
    }

    #[test]
    fn test_every_input_change_resets_page() {
        let mut query = OrderListQuery::with_page_size(5);
        let changes: Vec<Box<dyn Fn(&mut OrderListQuery)>> = vec![
            Box::new(|q: &mut OrderListQuery| q.set_search_text("a")),
            Box::new(|q: &mut OrderListQuery| q.set_user_text("a")),
            Box::new(|q: &mut OrderListQuery| q.set_status(OrderStatus::Pending, true)),
            Box::new(|q: &mut OrderListQuery| q.toggle_sort(SortField::Date)),
            Box::new(|q: &mut OrderListQuery| q.set_page_size(25)),
            Box::new(|q: &mut OrderListQuery| q.clear_all_filters()),
        ];
        for change in changes {
            query.pagination.current_page = 2;
            change(&mut query);
            assert_eq!(query.pagination.current_page, 1);
        }
    }

    #[test]
    fn test_search_natali() {
        let mut query = OrderListQuery::default();
        query.set_search_text("nAtAlI");
        let page = query.derive(orders());
        assert_eq!(page.total_count, 1);
        assert_eq!(ids(&page), vec!["#CM9801"]);
    }

    #[test]
    fn test_no_match_is_one_empty_page() {
        let mut query = OrderListQuery::default();
        query.set_search_text("no such order");
        let page = query.derive(orders());
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_empty_dataset() {
        let page = OrderListQuery::default().derive(&[]);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut query = OrderListQuery::with_page_size(5);
        query.go_to_page(9, 2);
        assert_eq!(query.pagination.current_page, 2);
        query.next_page(2);
        assert_eq!(query.pagination.current_page, 2);
        query.prev_page(2);
        query.prev_page(2);
        assert_eq!(query.pagination.current_page, 1);
    }

    #[test]
    fn test_derive_clamps_stale_page() {
        let query = OrderListQuery {
            pagination: PaginationState {
                current_page: 4,
                page_size: 5,
            },
            ..Default::default()
        };
        let page = query.derive(orders());
        assert_eq!(page.current_page, 2);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn test_sort_applies_before_pagination() {
        let mut query = OrderListQuery::with_page_size(5);
        query.toggle_sort(SortField::Id);
        query.toggle_sort(SortField::Id);
        let page = query.derive(orders());
        assert_eq!(ids(&page), vec!["#CM9810", "#CM9809", "#CM9808", "#CM9807", "#CM9806"]);
    }

    #[test]
    fn test_filter_then_paginate_counts() {
        let mut query = OrderListQuery::with_page_size(5);
        query.set_status(OrderStatus::Complete, true);
        query.set_status(OrderStatus::Approved, true);
        query.set_status(OrderStatus::Pending, true);
        let page = query.derive(orders());
        assert_eq!(page.total_count, 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 5);

        query.set_status(OrderStatus::Pending, false);
        let page = query.derive(orders());
        assert_eq!(page.total_count, 4);
        assert_eq!(page.total_pages, 1);
    }
}
