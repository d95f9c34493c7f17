//! Gross strokes recorded for a single hole.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lowest strokes that can be recorded on a hole.
pub const MIN_HOLE_SCORE: i32 = 1;

/// Highest strokes that can be recorded on a hole.
pub const MAX_HOLE_SCORE: i32 = 9;

/// Strokes taken on one hole, or `None` when the player picked up the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<i32>", into = "Option<u8>")]
pub struct HoleScore(Option<u8>);

impl HoleScore {
    pub fn new(strokes: Option<i32>) -> Result<Self, DomainError> {
        match strokes {
            None => Ok(Self(None)),
            Some(value) if (MIN_HOLE_SCORE..=MAX_HOLE_SCORE).contains(&value) => {
                Ok(Self(Some(value as u8)))
            }
            Some(value) => Err(DomainError::invalid_value(
                "hole score",
                value,
                format!(
                    "Must be between {} and {}, or empty when the ball was picked up",
                    MIN_HOLE_SCORE, MAX_HOLE_SCORE
                ),
            )),
        }
    }

    pub fn picked_up() -> Self {
        Self(None)
    }

    pub fn strokes(&self) -> Option<u8> {
        self.0
    }

    pub fn is_picked_up(&self) -> bool {
        self.0.is_none()
    }
}

impl TryFrom<Option<i32>> for HoleScore {
    type Error = DomainError;

    fn try_from(value: Option<i32>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HoleScore> for Option<u8> {
    fn from(score: HoleScore) -> Self {
        score.0
    }
}

impl fmt::Display for HoleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(strokes) => write!(f, "{}", strokes),
            None => write!(f, "-"),
        }
    }
}
