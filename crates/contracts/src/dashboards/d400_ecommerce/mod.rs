pub mod dto;
pub mod mock_data;

pub use dto::*;
pub use mock_data::ecommerce_overview;
