//! Time-of-day sessions a round can be played in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Sessions order by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Morning,
    Afternoon,
    Evening,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Morning => "MORNING",
            SessionType::Afternoon => "AFTERNOON",
            SessionType::Evening => "EVENING",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MORNING" => Ok(SessionType::Morning),
            "AFTERNOON" => Ok(SessionType::Afternoon),
            "EVENING" => Ok(SessionType::Evening),
            _ => Err(DomainError::invalid_value(
                "session type",
                s,
                "Must be one of: MORNING, AFTERNOON, EVENING",
            )),
        }
    }
}
