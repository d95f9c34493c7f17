//! Repository abstractions over the competition backend.
//!
//! The backend is the source of truth; repositories only move wire records
//! in and out and hydrate them into domain entities.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use domain::models::{Invitation, Round};

use crate::error::ClientError;

pub use http::HttpBackend;
pub use memory::InMemoryBackend;

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Returns `None` when the backend has no invitation with this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, ClientError>;

    async fn list_by_competition(&self, competition_id: &str)
        -> Result<Vec<Invitation>, ClientError>;

    /// Sends a newly created invitation and returns the stored version.
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, ClientError>;

    /// Submits an accepted or declined invitation and returns the stored version.
    async fn respond(&self, invitation: &Invitation) -> Result<Invitation, ClientError>;
}

#[async_trait]
pub trait RoundRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Round>, ClientError>;

    async fn list_by_competition(&self, competition_id: &str) -> Result<Vec<Round>, ClientError>;
}

/// Path segment of the response endpoint for an answered invitation.
pub(crate) fn response_action(invitation: &Invitation) -> Result<&'static str, ClientError> {
    if invitation.is_accepted() {
        Ok("accept")
    } else if invitation.is_declined() {
        Ok("decline")
    } else {
        Err(ClientError::InvalidRequest(format!(
            "Invitation {} has status {} and cannot be submitted as a response",
            invitation.id(),
            invitation.status()
        )))
    }
}
