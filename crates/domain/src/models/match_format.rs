//! Match play formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Format in which the matches of a round are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchFormat {
    /// One against one.
    Singles,
    /// Two against two, best ball counts.
    Fourball,
    /// Two against two, alternate shot.
    Foursomes,
}

impl MatchFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchFormat::Singles => "SINGLES",
            MatchFormat::Fourball => "FOURBALL",
            MatchFormat::Foursomes => "FOURSOMES",
        }
    }

    /// Players each team fields in a single match.
    pub fn players_per_team(&self) -> u8 {
        match self {
            MatchFormat::Singles => 1,
            MatchFormat::Fourball | MatchFormat::Foursomes => 2,
        }
    }

    pub fn is_pairs_format(&self) -> bool {
        self.players_per_team() == 2
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLES" => Ok(MatchFormat::Singles),
            "FOURBALL" => Ok(MatchFormat::Fourball),
            "FOURSOMES" => Ok(MatchFormat::Foursomes),
            _ => Err(DomainError::invalid_value(
                "match format",
                s,
                "Must be one of: SINGLES, FOURBALL, FOURSOMES",
            )),
        }
    }
}
