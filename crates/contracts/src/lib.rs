//! Shared, target-independent part of the dashboard: data model, mock
//! datasets, the order list derivation pipeline, the selection model and the
//! theme store.

pub mod dashboards;
pub mod domain;
pub mod shared;
