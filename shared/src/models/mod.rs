//! Data models
//!
//! Shared between the floor service and the dashboard front-end.
//! Field names serialize in camelCase; ids are prefixed strings
//! (`hall-…`, `table-…`).

pub mod dining_table;
pub mod hall;
pub mod order;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use hall::*;
pub use order::*;
pub use user::*;
