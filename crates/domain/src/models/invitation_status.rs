//! Invitation status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::StatusLifecycle;
use crate::error::DomainError;

/// Status of a competition invitation.
///
/// `PENDING` is the only state with outgoing transitions. `EXPIRED` is
/// assigned by the backend when the invitation times out; no client command
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
}

impl InvitationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, InvitationStatus::Pending)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, InvitationStatus::Accepted)
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, InvitationStatus::Declined)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, InvitationStatus::Expired)
    }
}

impl StatusLifecycle for InvitationStatus {
    const KIND: &'static str = "invitation status";

    const ALL: &'static [Self] = &[
        InvitationStatus::Pending,
        InvitationStatus::Accepted,
        InvitationStatus::Declined,
        InvitationStatus::Expired,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "PENDING",
            InvitationStatus::Accepted => "ACCEPTED",
            InvitationStatus::Declined => "DECLINED",
            InvitationStatus::Expired => "EXPIRED",
        }
    }

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            InvitationStatus::Pending => &[
                InvitationStatus::Accepted,
                InvitationStatus::Declined,
                InvitationStatus::Expired,
            ],
            InvitationStatus::Accepted | InvitationStatus::Declined | InvitationStatus::Expired => {
                &[]
            }
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvitationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
