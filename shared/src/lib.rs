//! Shared types for the café floor
//!
//! Entity models, error types and change notifications used by the floor
//! service and the dashboard.

pub mod error;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, ErrorKind};
pub use message::SyncPayload;
