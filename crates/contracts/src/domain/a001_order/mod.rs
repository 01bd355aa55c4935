pub mod aggregate;
pub mod mock_data;

pub use aggregate::{Order, OrderId, OrderStatus, OrderUser};
pub use mock_data::orders;
