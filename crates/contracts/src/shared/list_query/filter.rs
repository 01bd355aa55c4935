use crate::domain::a001_order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter inputs of the order list.
///
/// Every predicate is inactive while its input is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub statuses: HashSet<OrderStatus>,
    pub user_text: String,
    pub search_text: String,
}

impl FilterState {
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || !self.statuses.is_empty() || !self.user_text.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Lowercases the text inputs once so the per-row check stays cheap.
    fn prepared(&self) -> PreparedFilter<'_> {
        PreparedFilter {
            search: self.search_text.to_lowercase(),
            user: self.user_text.to_lowercase(),
            statuses: &self.statuses,
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.prepared().matches(order)
    }
}

struct PreparedFilter<'a> {
    search: String,
    user: String,
    statuses: &'a HashSet<OrderStatus>,
}

impl PreparedFilter<'_> {
    fn matches(&self, order: &Order) -> bool {
        let search_match = self.search.is_empty()
            || contains_ci(order.id.as_str(), &self.search)
            || contains_ci(&order.user.name, &self.search)
            || contains_ci(&order.project, &self.search)
            || contains_ci(&order.address, &self.search);

        let status_match = self.statuses.is_empty() || self.statuses.contains(&order.status);

        let user_match = self.user.is_empty() || contains_ci(&order.user.name, &self.user);

        search_match && status_match && user_match
    }
}

/// `needle_lower` must already be lowercase.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keeps the orders matching every active predicate, in dataset order.
pub fn filter_orders<'a>(dataset: &'a [Order], filters: &FilterState) -> Vec<&'a Order> {
    let prepared = filters.prepared();
    dataset.iter().filter(|order| prepared.matches(order)).collect()
}

/// Statuses present in the dataset, in order of first appearance.
pub fn unique_statuses(dataset: &[Order]) -> Vec<OrderStatus> {
    let mut seen = Vec::new();
    for order in dataset {
        if !seen.contains(&order.status) {
            seen.push(order.status);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::orders;

    fn ids(rows: &[&Order]) -> Vec<String> {
        rows.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let rows = filter_orders(orders(), &FilterState::default());
        assert_eq!(rows.len(), orders().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        for query in ["Natali", "natali", "NATALI"] {
            let filters = FilterState {
                search_text: query.to_string(),
                ..Default::default()
            };
            let rows = filter_orders(orders(), &filters);
            assert_eq!(ids(&rows), vec!["#CM9801"], "query {query}");
        }
    }

    #[test]
    fn test_search_covers_id_project_and_address() {
        let by_id = FilterState {
            search_text: "cm9807".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_orders(orders(), &by_id)), vec!["#CM9807"]);

        let by_project = FilterState {
            search_text: "landing page".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_orders(orders(), &by_project)), vec!["#CM9801", "#CM9805"]);

        let by_address = FilterState {
            search_text: "lane".into(),
            ..Default::default()
        };
        // "Meadow Lane", "Nest Lane", "Creative Lane" and the user "Andi Lane"
        assert_eq!(
            ids(&filter_orders(orders(), &by_address)),
            vec!["#CM9801", "#CM9805", "#CM9810"]
        );
    }

    #[test]
    fn test_search_does_not_look_at_date_or_status() {
        let filters = FilterState {
            search_text: "yesterday".into(),
            ..Default::default()
        };
        assert!(filter_orders(orders(), &filters).is_empty());

        let filters = FilterState {
            search_text: "approved".into(),
            ..Default::default()
        };
        assert!(filter_orders(orders(), &filters).is_empty());
    }

    #[test]
    fn test_status_and_user_predicates_combine() {
        let mut filters = FilterState::default();
        filters.statuses.insert(OrderStatus::Complete);
        filters.statuses.insert(OrderStatus::Pending);
        assert_eq!(
            ids(&filter_orders(orders(), &filters)),
            vec!["#CM9802", "#CM9803", "#CM9807", "#CM9808"]
        );

        filters.user_text = "CHEN".into();
        assert_eq!(ids(&filter_orders(orders(), &filters)), vec!["#CM9807"]);
    }

    #[test]
    fn test_filtered_rows_satisfy_every_predicate() {
        let mut filters = FilterState {
            search_text: "a".into(),
            user_text: "e".into(),
            ..Default::default()
        };
        filters.statuses.insert(OrderStatus::InProgress);
        filters.statuses.insert(OrderStatus::Rejected);

        let rows = filter_orders(orders(), &filters);
        assert!(!rows.is_empty());
        for order in rows {
            assert!(orders().contains(order));
            assert!(filters.statuses.contains(&order.status));
            assert!(order.user.name.to_lowercase().contains('e'));
            let haystack = format!(
                "{} {} {} {}",
                order.id, order.user.name, order.project, order.address
            )
            .to_lowercase();
            assert!(haystack.contains('a'));
        }
    }

    #[test]
    fn test_has_active_filters_and_clear() {
        let mut filters = FilterState::default();
        assert!(!filters.has_active_filters());
        filters.user_text = "kim".into();
        assert!(filters.has_active_filters());
        filters.clear();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_unique_statuses_in_first_appearance_order() {
        assert_eq!(
            unique_statuses(orders()),
            vec![
                OrderStatus::InProgress,
                OrderStatus::Complete,
                OrderStatus::Pending,
                OrderStatus::Approved,
                OrderStatus::Rejected,
            ]
        );
        assert!(unique_statuses(&[]).is_empty());
    }
}
