pub mod panel;
pub mod right;

pub use panel::RightPanel;
pub use right::Right;
