pub mod activity;
pub mod config;
pub mod list_query;
pub mod selection;
pub mod theme;
