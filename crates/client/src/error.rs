use domain::models::{InvitationStatus, StatusLifecycle};
use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by repositories and services.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Message suitable for showing to the person who issued the command.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Domain(DomainError::InvalidTransition { kind, from, .. })
                if *kind == InvitationStatus::KIND =>
            {
                match from.parse::<InvitationStatus>() {
                    Ok(InvitationStatus::Expired) => "This invitation has expired".to_string(),
                    Ok(status) if status.is_terminal() => {
                        "This invitation has already been responded to".to_string()
                    }
                    _ => self.to_string(),
                }
            }
            ClientError::Http(err) if err.is_timeout() => {
                "The server did not respond in time. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_responded_message() {
        let err: ClientError = InvitationStatus::Accepted
            .validate_transition(InvitationStatus::Declined)
            .unwrap_err()
            .into();
        assert_eq!(
            err.user_message(),
            "This invitation has already been responded to"
        );
    }

    #[test]
    fn test_expired_message() {
        let err: ClientError = InvitationStatus::Expired
            .validate_transition(InvitationStatus::Accepted)
            .unwrap_err()
            .into();
        assert_eq!(err.user_message(), "This invitation has expired");
    }

    #[test]
    fn test_other_errors_use_display() {
        let err = ClientError::Backend {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.user_message(), "Backend returned 500: boom");

        let err = ClientError::NotFound("Invitation inv-1".to_string());
        assert_eq!(err.user_message(), "Not found: Invitation inv-1");
    }

    #[test]
    fn test_domain_errors_are_transparent() {
        let domain_err = "BOGUS".parse::<InvitationStatus>().unwrap_err();
        let expected = domain_err.to_string();
        let err = ClientError::from(domain_err);
        assert_eq!(err.to_string(), expected);
    }
}
