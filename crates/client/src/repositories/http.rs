//! REST implementation of the repositories.

use std::time::Duration;

use async_trait::async_trait;
use domain::models::{Invitation, InvitationRecord, Round, RoundRecord};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{response_action, InvitationRepository, RoundRepository};
use crate::config::BackendConfig;
use crate::error::ClientError;

/// Client for the competition backend REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::Config(format!("Invalid backend URL {}: {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Backend URL {} cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("ryder-cup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!(%method, %url, "Backend request");

        let builder = self.client.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and decodes the body. A 404 maps to `Ok(None)`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let url = response.url().clone();
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                %url,
                message = %message,
                "Backend request failed"
            );
            return Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Some(response.json::<T>().await?))
    }
}

#[async_trait]
impl InvitationRepository for HttpBackend {
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, ClientError> {
        let record: Option<InvitationRecord> = self
            .fetch(self.request(Method::GET, &["invitations", id]))
            .await?;

        Ok(record.map(Invitation::from_persistence).transpose()?)
    }

    async fn list_by_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<Invitation>, ClientError> {
        let records: Vec<InvitationRecord> = self
            .fetch(self.request(
                Method::GET,
                &["competitions", competition_id, "invitations"],
            ))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Competition {}", competition_id)))?;

        records
            .into_iter()
            .map(|record| Invitation::from_persistence(record).map_err(ClientError::from))
            .collect()
    }

    async fn create(&self, invitation: &Invitation) -> Result<Invitation, ClientError> {
        let builder = self
            .request(
                Method::POST,
                &["competitions", invitation.competition_id(), "invitations"],
            )
            .json(&invitation.to_persistence());

        let record: InvitationRecord = self.fetch(builder).await?.ok_or_else(|| {
            ClientError::NotFound(format!("Competition {}", invitation.competition_id()))
        })?;

        info!(
            invitation_id = %record.id,
            competition_id = %record.competition_id,
            "Invitation sent"
        );

        Ok(Invitation::from_persistence(record)?)
    }

    async fn respond(&self, invitation: &Invitation) -> Result<Invitation, ClientError> {
        let action = response_action(invitation)?;
        let builder = self
            .request(Method::POST, &["invitations", invitation.id(), action])
            .json(&invitation.to_persistence());

        let record: InvitationRecord = self
            .fetch(builder)
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Invitation {}", invitation.id())))?;

        info!(
            invitation_id = %record.id,
            status = %record.status,
            "Invitation response stored"
        );

        Ok(Invitation::from_persistence(record)?)
    }
}

#[async_trait]
impl RoundRepository for HttpBackend {
    async fn find_by_id(&self, id: &str) -> Result<Option<Round>, ClientError> {
        let record: Option<RoundRecord> =
            self.fetch(self.request(Method::GET, &["rounds", id])).await?;

        Ok(record.map(Round::from_persistence).transpose()?)
    }

    async fn list_by_competition(&self, competition_id: &str) -> Result<Vec<Round>, ClientError> {
        let records: Vec<RoundRecord> = self
            .fetch(self.request(Method::GET, &["competitions", competition_id, "rounds"]))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Competition {}", competition_id)))?;

        records
            .into_iter()
            .map(|record| Round::from_persistence(record).map_err(ClientError::from))
            .collect()
    }
}
