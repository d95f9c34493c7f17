//! Domain error types.

use thiserror::Error;

/// Errors raised while constructing or transitioning domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A status or scalar was built from an unrecognized string or an out-of-range number.
    #[error("Invalid {kind}: {value}. {reason}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// A command asked for a status the current status cannot reach.
    #[error(
        "Invalid {kind} transition from {from} to {to} (allowed: {})",
        display_allowed(.allowed)
    )]
    InvalidTransition {
        kind: &'static str,
        from: String,
        to: String,
        allowed: Vec<String>,
    },

    /// Field-level validation of an entity input failed.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub(crate) fn invalid_value(
        kind: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        DomainError::InvalidValue {
            kind,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error reports an illegal status transition.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

fn display_allowed(allowed: &[String]) -> String {
    if allowed.is_empty() {
        "none".to_string()
    } else {
        allowed.join(", ")
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        details.sort();

        DomainError::Validation(details.join("; "))
    }
}
