//! Round status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::StatusLifecycle;
use crate::error::DomainError;

/// Status of a competition round.
///
/// Progression is strictly linear:
/// `PENDING_TEAMS -> PENDING_MATCHES -> SCHEDULED -> IN_PROGRESS -> COMPLETED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    #[default]
    PendingTeams,
    PendingMatches,
    Scheduled,
    InProgress,
    Completed,
}

impl RoundStatus {
    /// Teams and matches may only be changed before the round is scheduled.
    pub fn is_editable(&self) -> bool {
        matches!(self, RoundStatus::PendingTeams | RoundStatus::PendingMatches)
    }

    pub fn is_pending_teams(&self) -> bool {
        matches!(self, RoundStatus::PendingTeams)
    }

    pub fn is_pending_matches(&self) -> bool {
        matches!(self, RoundStatus::PendingMatches)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, RoundStatus::Scheduled)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, RoundStatus::InProgress)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RoundStatus::Completed)
    }
}

impl StatusLifecycle for RoundStatus {
    const KIND: &'static str = "round status";

    const ALL: &'static [Self] = &[
        RoundStatus::PendingTeams,
        RoundStatus::PendingMatches,
        RoundStatus::Scheduled,
        RoundStatus::InProgress,
        RoundStatus::Completed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::PendingTeams => "PENDING_TEAMS",
            RoundStatus::PendingMatches => "PENDING_MATCHES",
            RoundStatus::Scheduled => "SCHEDULED",
            RoundStatus::InProgress => "IN_PROGRESS",
            RoundStatus::Completed => "COMPLETED",
        }
    }

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            RoundStatus::PendingTeams => &[RoundStatus::PendingMatches],
            RoundStatus::PendingMatches => &[RoundStatus::Scheduled],
            RoundStatus::Scheduled => &[RoundStatus::InProgress],
            RoundStatus::InProgress => &[RoundStatus::Completed],
            RoundStatus::Completed => &[],
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoundStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
