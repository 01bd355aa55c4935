use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Order number as shown in the table, e.g. `#CM9801`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Order processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Label shown in the table and used as the sort key of the status column.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// CSS modifier for the status dot (`status-dot--<slug>`).
    pub fn css_slug(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Complete => "complete",
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
        }
    }

    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::InProgress,
            OrderStatus::Complete,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Rejected,
        ]
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub avatar: String,
}

/// One row of the order list.
///
/// `date` is a display string ("Just now", "Feb 2, 2023"), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user: OrderUser,
    pub project: String,
    pub address: String,
    pub date: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: &str,
        user_name: &str,
        avatar: &str,
        project: &str,
        address: &str,
        date: &str,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            user: OrderUser {
                name: user_name.to_string(),
                avatar: avatar.to_string(),
            },
            project: project.to_string(),
            address: address.to_string(),
            date: date.to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        for status in OrderStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_order_id_is_transparent() {
        let order = Order::new(
            "#CM9801",
            "Natali Craig",
            "/users/user1.png",
            "Landing Page",
            "Meadow Lane Oakland",
            "Just now",
            OrderStatus::InProgress,
        );
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], "#CM9801");
        assert_eq!(value["user"]["name"], "Natali Craig");
        assert_eq!(value["status"], "In Progress");
    }
}
