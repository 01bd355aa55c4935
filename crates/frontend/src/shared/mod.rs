pub mod components;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod theme;
