//! Invitation use cases.
//!
//! Every response is decided locally first: the entity refuses illegal
//! transitions before any request reaches the backend.

use std::sync::Arc;

use chrono::{Duration, Utc};
use domain::models::{Invitation, NewInvitation};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ClientError;
use crate::repositories::InvitationRepository;

/// Details of an invitation to send.
#[derive(Debug, Clone)]
pub struct SendInvitation {
    pub competition_id: String,
    pub inviter_id: String,
    pub invitee_email: String,
    pub invitee_user_id: Option<String>,
    pub personal_message: Option<String>,
    /// Days until expiry. `None` leaves the expiry to the backend.
    pub expires_in_days: Option<i64>,
}

/// How an invitee answers an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationResponse {
    Accept,
    Decline,
}

#[derive(Clone)]
pub struct InvitationService {
    repository: Arc<dyn InvitationRepository>,
}

impl InvitationService {
    pub fn new(repository: Arc<dyn InvitationRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &str) -> Result<Invitation, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Invitation {}", id)))
    }

    pub async fn list_for_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<Invitation>, ClientError> {
        self.repository.list_by_competition(competition_id).await
    }

    /// Creates a pending invitation and sends it to the backend.
    #[instrument(skip(self, request), fields(competition_id = %request.competition_id))]
    pub async fn send(&self, request: SendInvitation) -> Result<Invitation, ClientError> {
        if let Some(days) = request.expires_in_days {
            shared::validation::validate_expiration_days(days).map_err(|e| {
                ClientError::InvalidRequest(
                    e.message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                )
            })?;
        }

        let now = Utc::now();
        let invitation = Invitation::create_at(
            NewInvitation {
                id: Uuid::new_v4().to_string(),
                competition_id: request.competition_id,
                inviter_id: request.inviter_id,
                invitee_email: request.invitee_email,
                invitee_user_id: request.invitee_user_id,
                personal_message: request.personal_message,
                expires_at: request.expires_in_days.map(|days| now + Duration::days(days)),
            },
            now,
        )?;

        let stored = self.repository.create(&invitation).await?;
        info!(invitation_id = %stored.id(), "Invitation created");

        Ok(stored)
    }

    pub async fn accept(&self, id: &str) -> Result<Invitation, ClientError> {
        self.respond(id, InvitationResponse::Accept).await
    }

    pub async fn decline(&self, id: &str) -> Result<Invitation, ClientError> {
        self.respond(id, InvitationResponse::Decline).await
    }

    #[instrument(skip(self))]
    pub async fn respond(
        &self,
        id: &str,
        response: InvitationResponse,
    ) -> Result<Invitation, ClientError> {
        let current = self.get(id).await?;

        let answered = match response {
            InvitationResponse::Accept => current.accept()?,
            InvitationResponse::Decline => current.decline()?,
        };

        let stored = self.repository.respond(&answered).await?;
        info!(
            invitation_id = %stored.id(),
            status = %stored.status(),
            "Invitation answered"
        );

        Ok(stored)
    }
}
