//! Handicap allowance percentage applied to a round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

pub const MIN_ALLOWANCE_PERCENTAGE: i32 = 50;
pub const MAX_ALLOWANCE_PERCENTAGE: i32 = 100;
pub const ALLOWANCE_PERCENTAGE_STEP: i32 = 5;

/// Percentage of the course handicap a player receives.
///
/// `None` means the World Handicap System default for the match format
/// applies; a custom value overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<i32>", into = "Option<u8>")]
pub struct AllowancePercentage(Option<u8>);

impl AllowancePercentage {
    pub fn new(percentage: Option<i32>) -> Result<Self, DomainError> {
        let Some(value) = percentage else {
            return Ok(Self(None));
        };

        if !(MIN_ALLOWANCE_PERCENTAGE..=MAX_ALLOWANCE_PERCENTAGE).contains(&value) {
            return Err(DomainError::invalid_value(
                "allowance percentage",
                value,
                format!(
                    "Must be between {} and {}",
                    MIN_ALLOWANCE_PERCENTAGE, MAX_ALLOWANCE_PERCENTAGE
                ),
            ));
        }

        if value % ALLOWANCE_PERCENTAGE_STEP != 0 {
            return Err(DomainError::invalid_value(
                "allowance percentage",
                value,
                format!("Must be in increments of {}", ALLOWANCE_PERCENTAGE_STEP),
            ));
        }

        Ok(Self(Some(value as u8)))
    }

    /// Use the WHS default allowance.
    pub fn whs_default() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<u8> {
        self.0
    }

    pub fn is_custom(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_whs_default(&self) -> bool {
        self.0.is_none()
    }

    /// Custom percentage as a multiplier (90% -> 0.9).
    pub fn as_fraction(&self) -> Option<f64> {
        self.0.map(|p| f64::from(p) / 100.0)
    }
}

impl TryFrom<Option<i32>> for AllowancePercentage {
    type Error = DomainError;

    fn try_from(value: Option<i32>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AllowancePercentage> for Option<u8> {
    fn from(allowance: AllowancePercentage) -> Self {
        allowance.0
    }
}

impl fmt::Display for AllowancePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{}%", p),
            None => write!(f, "WHS default"),
        }
    }
}
