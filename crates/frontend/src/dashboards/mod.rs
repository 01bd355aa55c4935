pub mod d400_ecommerce;

pub use d400_ecommerce::ui::EcommerceDashboard;
