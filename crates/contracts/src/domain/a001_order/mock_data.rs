use super::aggregate::{Order, OrderStatus};
use once_cell::sync::Lazy;

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    use OrderStatus::*;
    vec![
        Order::new("#CM9801", "Natali Craig", "/users/user1.png", "Landing Page", "Meadow Lane Oakland", "Just now", InProgress),
        Order::new("#CM9802", "Kate Morrison", "/users/user2.png", "CRM Admin pages", "Larry San Francisco", "A minute ago", Complete),
        Order::new("#CM9803", "Drew Cano", "/users/user3.png", "Client Project", "Bagwell Avenue Ocala", "1 hour ago", Pending),
        Order::new("#CM9804", "Orlando Diggs", "/users/user4.png", "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", Approved),
        Order::new("#CM9805", "Andi Lane", "/users/user5.png", "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", Rejected),
        Order::new("#CM9806", "Sarah Johnson", "/users/user6.png", "E-commerce Platform", "Main Street Boston", "2 hours ago", InProgress),
        Order::new("#CM9807", "Michael Chen", "/users/user7.png", "Mobile App", "Tech Avenue Seattle", "3 hours ago", Complete),
        Order::new("#CM9808", "Emily Rodriguez", "/users/user8.png", "Analytics Dashboard", "Data Drive Austin", "4 hours ago", Pending),
        Order::new("#CM9809", "David Kim", "/users/user9.png", "API Integration", "Cloud Street Denver", "5 hours ago", Approved),
        Order::new("#CM9810", "Lisa Thompson", "/users/user1.png", "UI/UX Design", "Creative Lane Portland", "6 hours ago", Rejected),
    ]
});

/// The fixed order dataset, in display order.
pub fn orders() -> &'static [Order] {
    &ORDERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = orders().iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids.len(), orders().len());
        assert_eq!(orders().len(), 10);
    }

    #[test]
    fn test_dataset_order_is_stable() {
        assert_eq!(orders()[0].id.as_str(), "#CM9801");
        assert_eq!(orders()[9].id.as_str(), "#CM9810");
    }
}
