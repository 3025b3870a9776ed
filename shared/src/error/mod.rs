//! Unified error system for the café floor
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`ErrorKind`]: What the caller does about it (validation, not found, conflict)
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 7xxx: Floor errors (halls, tables)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::HallHasTables);
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//!
//! let err = AppError::validation("Table name must not be empty")
//!     .with_detail("field", "name");
//! assert!(err.is_validation());
//! ```

mod category;
mod codes;
mod kind;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use kind::ErrorKind;
pub use types::{AppError, AppResult};
