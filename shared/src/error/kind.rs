//! Coarse error kinds for call-site recovery
//!
//! The dashboard recovers every floor error at the call site and shows a
//! notification; the kind decides which one.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or invalid input (empty name, unset hall, capacity out of range)
    Validation,
    /// The referenced hall or table does not exist
    NotFound,
    /// The request contradicts current state (hall still owns tables)
    Conflict,
    /// No current user, or the user lacks the required role
    Unauthorized,
    /// Local failure unrelated to the request
    Internal,
}

impl ErrorCode {
    /// Map this code onto the kind the caller reacts to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::TableNotFound | Self::HallNotFound => ErrorKind::NotFound,

            Self::HallHasTables | Self::InvalidTransition | Self::OrderRequiresOccupied => {
                ErrorKind::Conflict
            }

            Self::NotAuthenticated | Self::AdminRequired => ErrorKind::Unauthorized,

            Self::Success
            | Self::Unknown
            | Self::InternalError
            | Self::StorageError => ErrorKind::Internal,

            Self::ValidationFailed | Self::RequiredField | Self::ValueOutOfRange => {
                ErrorKind::Validation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_codes_map_to_kinds() {
        assert_eq!(ErrorCode::RequiredField.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::ValueOutOfRange.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::TableNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::HallNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::HallHasTables.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::InvalidTransition.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::AdminRequired.kind(), ErrorKind::Unauthorized);
        assert_eq!(ErrorCode::StorageError.kind(), ErrorKind::Internal);
    }
}
