//! Handicap calculation mode for a round.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// How handicap strokes are allocated. Only match play is supported today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandicapMode {
    #[default]
    MatchPlay,
}

impl HandicapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandicapMode::MatchPlay => "MATCH_PLAY",
        }
    }
}

impl fmt::Display for HandicapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HandicapMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MATCH_PLAY" => Ok(HandicapMode::MatchPlay),
            _ => Err(DomainError::invalid_value(
                "handicap mode",
                s,
                "Must be one of: MATCH_PLAY",
            )),
        }
    }
}
