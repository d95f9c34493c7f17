//! Shared behaviour of status lifecycles.
//!
//! A lifecycle is a closed enum whose variants are the states and whose
//! [`StatusLifecycle::allowed_transitions`] table is the single source of
//! truth for which moves are legal. Every other query is derived from it.

use std::fmt;

use crate::error::DomainError;

/// A closed set of states with a fixed transition table.
pub trait StatusLifecycle: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    /// Every state, in declaration order.
    const ALL: &'static [Self];

    /// Canonical wire token.
    fn as_str(&self) -> &'static str;

    /// States reachable from this one in a single step.
    fn allowed_transitions(&self) -> &'static [Self];

    /// Parses a canonical wire token. Matching is exact and case-sensitive.
    fn parse(value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                DomainError::invalid_value(
                    Self::KIND,
                    value,
                    format!("Must be one of: {}", valid.join(", ")),
                )
            })
    }

    fn can_transition_to(&self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Like [`can_transition_to`](Self::can_transition_to) but returns an
    /// error naming the rejected edge and the legal alternatives.
    fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            return Ok(());
        }

        Err(DomainError::InvalidTransition {
            kind: Self::KIND,
            from: self.as_str().to_string(),
            to: target.as_str().to_string(),
            allowed: self
                .allowed_transitions()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        })
    }

    /// A terminal state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}
