//! Input validation helpers
//!
//! Centralized limits and checks shared by the hall and table operations.

use shared::models::{FLOORS, TABLE_CAPACITIES};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: hall, table
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Returns the trimmed value.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(trimmed.to_string())
}

/// Validate that an optional string, if present, is non-empty and within the limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    value
        .map(|v| validate_required_text(v, field, max_len))
        .transpose()
}

pub fn validate_floor(floor: u8) -> AppResult<()> {
    if !FLOORS.contains(&floor) {
        return Err(AppError::out_of_range(
            "floor",
            format!("floor must be one of {FLOORS:?}, got {floor}"),
        ));
    }
    Ok(())
}

pub fn validate_capacity(capacity: u8) -> AppResult<()> {
    if !TABLE_CAPACITIES.contains(&capacity) {
        return Err(AppError::out_of_range(
            "capacity",
            format!("capacity must be one of {TABLE_CAPACITIES:?}, got {capacity}"),
        ));
    }
    Ok(())
}

/// A hall must be selected: the id is present and non-blank
pub fn validate_hall_selected(hall_id: &str) -> AppResult<()> {
    if hall_id.trim().is_empty() {
        return Err(AppError::required("hallId"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(
            validate_required_text("  A1 ", "name", MAX_NAME_LEN).unwrap(),
            "A1"
        );
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_required_text_length() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        // counts characters, not bytes
        let persian = "س".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&persian, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(validate_optional_text(None, "name", 10).unwrap(), None);
        assert!(validate_optional_text(Some(""), "name", 10).is_err());
    }

    #[test]
    fn test_floor_and_capacity() {
        assert!(validate_floor(1).is_ok());
        assert!(validate_floor(2).is_ok());
        assert_eq!(validate_floor(3).unwrap_err().code, ErrorCode::ValueOutOfRange);

        for capacity in [2, 4, 6, 8] {
            assert!(validate_capacity(capacity).is_ok());
        }
        assert!(validate_capacity(3).is_err());
        assert!(validate_capacity(0).is_err());
    }

    #[test]
    fn test_hall_selected() {
        assert!(validate_hall_selected("hall-1").is_ok());
        assert!(validate_hall_selected(" ").unwrap_err().is_validation());
    }
}
