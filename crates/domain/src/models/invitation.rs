//! Competition invitation entity.
//!
//! An invitation is created by the competition creator in `PENDING` state and
//! answered by the invitee with [`Invitation::accept`] or
//! [`Invitation::decline`]. Both commands return a new value and leave the
//! receiver untouched. Expiry is decided by the backend and only ever arrives
//! through [`Invitation::from_persistence`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

use super::invitation_status::InvitationStatus;
use super::status::StatusLifecycle;
use crate::error::DomainError;

/// Maximum characters in an invitation's personal message.
pub const MAX_PERSONAL_MESSAGE_LENGTH: usize = 500;

/// Input for creating a new invitation.
///
/// New invitations always start out pending, so the input carries no status.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInvitation {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub competition_id: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub inviter_id: String,

    #[validate(email(message = "Invalid email address"))]
    pub invitee_email: String,

    pub invitee_user_id: Option<String>,

    #[validate(length(max = 500, message = "Personal message must be at most 500 characters"))]
    pub personal_message: Option<String>,

    pub expires_at: Option<DateTime<Utc>>,
}

/// Flat wire representation of an invitation.
///
/// This is the JSON body exchanged with the invitation endpoints. Status is
/// kept as its raw token so that hydration reports unknown values as domain
/// errors rather than decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    pub id: String,
    pub competition_id: String,
    pub inviter_id: String,
    pub invitee_email: String,
    pub invitee_user_id: Option<String>,
    pub status: String,
    pub personal_message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Invitation to join a competition.
///
/// Equality is by id: two snapshots of the same invitation compare equal even
/// when their status differs.
#[derive(Debug, Clone)]
pub struct Invitation {
    id: String,
    competition_id: String,
    inviter_id: String,
    invitee_email: String,
    invitee_user_id: Option<String>,
    status: InvitationStatus,
    personal_message: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    responded_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invitation {
    /// Creates a pending invitation stamped with the current time.
    pub fn create(input: NewInvitation) -> Result<Self, DomainError> {
        Self::create_at(input, Utc::now())
    }

    pub fn create_at(input: NewInvitation, now: DateTime<Utc>) -> Result<Self, DomainError> {
        input.validate()?;

        Ok(Self {
            id: input.id,
            competition_id: input.competition_id,
            inviter_id: input.inviter_id,
            invitee_email: input.invitee_email,
            invitee_user_id: input.invitee_user_id,
            status: InvitationStatus::Pending,
            personal_message: input.personal_message,
            expires_at: input.expires_at,
            responded_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds an invitation from a backend record. Any valid status is accepted.
    pub fn from_persistence(record: InvitationRecord) -> Result<Self, DomainError> {
        require_present("id", &record.id)?;
        require_present("competitionId", &record.competition_id)?;
        require_present("inviterId", &record.inviter_id)?;
        require_present("inviteeEmail", &record.invitee_email)?;

        let status: InvitationStatus = record.status.parse()?;

        if let Some(message) = &record.personal_message {
            let length = message.chars().count();
            if length > MAX_PERSONAL_MESSAGE_LENGTH {
                return Err(DomainError::invalid_value(
                    "invitation",
                    "personalMessage",
                    format!(
                        "Must be at most {} characters, got {}",
                        MAX_PERSONAL_MESSAGE_LENGTH, length
                    ),
                ));
            }
        }

        if status.is_pending() && record.responded_at.is_some() {
            return Err(DomainError::invalid_value(
                "invitation",
                "respondedAt",
                "A pending invitation cannot have a response time",
            ));
        }

        Ok(Self {
            id: record.id,
            competition_id: record.competition_id,
            inviter_id: record.inviter_id,
            invitee_email: record.invitee_email,
            invitee_user_id: record.invitee_user_id,
            status,
            personal_message: record.personal_message,
            expires_at: record.expires_at,
            responded_at: record.responded_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    /// Flattens the invitation into its wire record.
    pub fn to_persistence(&self) -> InvitationRecord {
        InvitationRecord {
            id: self.id.clone(),
            competition_id: self.competition_id.clone(),
            inviter_id: self.inviter_id.clone(),
            invitee_email: self.invitee_email.clone(),
            invitee_user_id: self.invitee_user_id.clone(),
            status: self.status.as_str().to_string(),
            personal_message: self.personal_message.clone(),
            expires_at: self.expires_at,
            responded_at: self.responded_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn accept(&self) -> Result<Self, DomainError> {
        self.accept_at(Utc::now())
    }

    pub fn accept_at(&self, now: DateTime<Utc>) -> Result<Self, DomainError> {
        self.respond(InvitationStatus::Accepted, now)
    }

    pub fn decline(&self) -> Result<Self, DomainError> {
        self.decline_at(Utc::now())
    }

    pub fn decline_at(&self, now: DateTime<Utc>) -> Result<Self, DomainError> {
        self.respond(InvitationStatus::Declined, now)
    }

    fn respond(&self, target: InvitationStatus, now: DateTime<Utc>) -> Result<Self, DomainError> {
        self.status.validate_transition(target)?;

        tracing::debug!(
            invitation_id = %self.id,
            from = %self.status,
            to = %target,
            "Invitation status transition"
        );

        Ok(Self {
            status: target,
            responded_at: Some(now),
            updated_at: now,
            ..self.clone()
        })
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }

    pub fn is_declined(&self) -> bool {
        self.status.is_declined()
    }

    pub fn is_expired(&self) -> bool {
        self.status.is_expired()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn competition_id(&self) -> &str {
        &self.competition_id
    }

    pub fn inviter_id(&self) -> &str {
        &self.inviter_id
    }

    pub fn invitee_email(&self) -> &str {
        &self.invitee_email
    }

    pub fn invitee_user_id(&self) -> Option<&str> {
        self.invitee_user_id.as_deref()
    }

    pub fn status(&self) -> InvitationStatus {
        self.status
    }

    pub fn personal_message(&self) -> Option<&str> {
        self.personal_message.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn responded_at(&self) -> Option<DateTime<Utc>> {
        self.responded_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Invitation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invitation {}

impl Hash for Invitation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl TryFrom<InvitationRecord> for Invitation {
    type Error = DomainError;

    fn try_from(record: InvitationRecord) -> Result<Self, Self::Error> {
        Self::from_persistence(record)
    }
}

impl From<&Invitation> for InvitationRecord {
    fn from(invitation: &Invitation) -> Self {
        invitation.to_persistence()
    }
}

fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    shared::validation::validate_not_blank(value)
        .map_err(|_| DomainError::invalid_value("invitation", field, "Must not be empty"))
}
