//! Unified error codes for the café floor
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 7xxx: Floor errors (halls, tables, table orders)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the dashboard front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 7xxx: Floor ====================
    /// Table not found
    TableNotFound = 7001,
    /// Status change is outside the service flow
    InvalidTransition = 7002,
    /// Orders can only be attached to occupied tables
    OrderRequiresOccupied = 7003,
    /// Hall not found
    HallNotFound = 7101,
    /// Hall still has tables
    HallHasTables = 7102,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Local storage error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::AdminRequired => "Administrator role is required",

            // Floor
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidTransition => "Table status transition is not allowed",
            ErrorCode::OrderRequiresOccupied => "Table must be occupied to hold an order",
            ErrorCode::HallNotFound => "Hall not found",
            ErrorCode::HallHasTables => "Hall has associated tables",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth / Permission
            1001 => Ok(ErrorCode::NotAuthenticated),
            2003 => Ok(ErrorCode::AdminRequired),

            // Floor
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::InvalidTransition),
            7003 => Ok(ErrorCode::OrderRequiresOccupied),
            7101 => Ok(ErrorCode::HallNotFound),
            7102 => Ok(ErrorCode::HallHasTables),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
