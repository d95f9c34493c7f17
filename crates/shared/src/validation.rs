//! Common validation utilities.

use validator::ValidationError;

/// Minimum number of days an invitation may stay open.
pub const MIN_EXPIRATION_DAYS: i64 = 1;

/// Maximum number of days an invitation may stay open.
pub const MAX_EXPIRATION_DAYS: i64 = 30;

/// Validates that a string contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that an invitation lifetime is within range (1 to 30 days).
pub fn validate_expiration_days(days: i64) -> Result<(), ValidationError> {
    if (MIN_EXPIRATION_DAYS..=MAX_EXPIRATION_DAYS).contains(&days) {
        Ok(())
    } else {
        let mut err = ValidationError::new("expiration_range");
        err.message = Some("Expiration must be between 1 and 30 days".into());
        Err(err)
    }
}
