//! Floor management: halls, tables and their service lifecycle

pub mod aggregation;
pub mod lifecycle;
pub mod registry;
pub mod seed;
pub mod service;

pub use aggregation::{
    DashboardSnapshot, StatusCounts, all_tables_flat, counts_by_status, counts_for_halls,
    dashboard, occupied_minutes, tables_by_hall,
};
pub use lifecycle::TransitionPolicy;
pub use registry::Registry;
pub use service::{FloorService, ResourceVersions};
