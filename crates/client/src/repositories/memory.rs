//! In-memory repositories for development and testing.
//!
//! Stores wire records the way the backend would and applies the same
//! conflict rules, so services can be exercised without a server.

use std::collections::HashMap;

use async_trait::async_trait;
use domain::models::{Invitation, InvitationRecord, Round, RoundRecord};
use tokio::sync::RwLock;
use tracing::info;

use super::{response_action, InvitationRepository, RoundRepository};
use crate::error::ClientError;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    invitations: RwLock<HashMap<String, InvitationRecord>>,
    rounds: RwLock<HashMap<String, RoundRecord>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record as-is, bypassing backend rules.
    pub async fn insert_invitation(&self, record: InvitationRecord) {
        self.invitations
            .write()
            .await
            .insert(record.id.clone(), record);
    }

    pub async fn insert_round(&self, record: RoundRecord) {
        self.rounds.write().await.insert(record.id.clone(), record);
    }

    /// Raw stored record, for assertions.
    pub async fn invitation_record(&self, id: &str) -> Option<InvitationRecord> {
        self.invitations.read().await.get(id).cloned()
    }
}

#[async_trait]
impl InvitationRepository for InMemoryBackend {
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, ClientError> {
        let record = self.invitations.read().await.get(id).cloned();
        Ok(record.map(Invitation::from_persistence).transpose()?)
    }

    async fn list_by_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<Invitation>, ClientError> {
        let mut records: Vec<InvitationRecord> = self
            .invitations
            .read()
            .await
            .values()
            .filter(|r| r.competition_id == competition_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        records
            .into_iter()
            .map(|record| Invitation::from_persistence(record).map_err(ClientError::from))
            .collect()
    }

    async fn create(&self, invitation: &Invitation) -> Result<Invitation, ClientError> {
        let mut invitations = self.invitations.write().await;

        if invitations.contains_key(invitation.id()) {
            return Err(ClientError::Backend {
                status: 409,
                message: format!("Invitation {} already exists", invitation.id()),
            });
        }

        let duplicate = invitations.values().any(|r| {
            r.competition_id == invitation.competition_id()
                && r.invitee_email.eq_ignore_ascii_case(invitation.invitee_email())
                && r.status == "PENDING"
        });
        if duplicate {
            return Err(ClientError::Backend {
                status: 409,
                message: format!(
                    "{} already has a pending invitation",
                    invitation.invitee_email()
                ),
            });
        }

        let record = invitation.to_persistence();
        invitations.insert(record.id.clone(), record.clone());
        info!(invitation_id = %record.id, "Invitation stored in memory");

        Ok(Invitation::from_persistence(record)?)
    }

    async fn respond(&self, invitation: &Invitation) -> Result<Invitation, ClientError> {
        response_action(invitation)?;

        let mut invitations = self.invitations.write().await;
        let stored = invitations
            .get_mut(invitation.id())
            .ok_or_else(|| ClientError::NotFound(format!("Invitation {}", invitation.id())))?;

        if stored.status != "PENDING" {
            return Err(ClientError::Backend {
                status: 409,
                message: format!("Invitation {} is already {}", stored.id, stored.status),
            });
        }

        *stored = invitation.to_persistence();
        Ok(Invitation::from_persistence(stored.clone())?)
    }
}

#[async_trait]
impl RoundRepository for InMemoryBackend {
    async fn find_by_id(&self, id: &str) -> Result<Option<Round>, ClientError> {
        let record = self.rounds.read().await.get(id).cloned();
        Ok(record.map(Round::from_persistence).transpose()?)
    }

    async fn list_by_competition(&self, competition_id: &str) -> Result<Vec<Round>, ClientError> {
        let records: Vec<RoundRecord> = self
            .rounds
            .read()
            .await
            .values()
            .filter(|r| r.competition_id == competition_id)
            .cloned()
            .collect();

        records
            .into_iter()
            .map(|record| Round::from_persistence(record).map_err(ClientError::from))
            .collect()
    }
}
