//! Round use cases.

use std::sync::Arc;

use domain::models::Round;
use tracing::debug;

use crate::error::ClientError;
use crate::repositories::RoundRepository;

#[derive(Clone)]
pub struct RoundService {
    repository: Arc<dyn RoundRepository>,
}

impl RoundService {
    pub fn new(repository: Arc<dyn RoundRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &str) -> Result<Round, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Round {}", id)))
    }

    /// Rounds of a competition in playing order: by date, then session.
    pub async fn list_for_competition(&self, competition_id: &str) -> Result<Vec<Round>, ClientError> {
        let mut rounds = self.repository.list_by_competition(competition_id).await?;
        rounds.sort_by(|a, b| {
            a.round_date()
                .cmp(&b.round_date())
                .then(a.session_type().cmp(&b.session_type()))
                .then_with(|| a.id().cmp(b.id()))
        });

        debug!(competition_id, count = rounds.len(), "Rounds loaded");
        Ok(rounds)
    }

    /// Rounds whose teams or matches can still be changed.
    pub async fn editable_rounds(&self, competition_id: &str) -> Result<Vec<Round>, ClientError> {
        Ok(self
            .list_for_competition(competition_id)
            .await?
            .into_iter()
            .filter(Round::is_editable)
            .collect())
    }
}
