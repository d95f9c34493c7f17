//! Domain layer for Ryder Cup Manager.
//!
//! This crate contains:
//! - Status lifecycles (InvitationStatus, RoundStatus)
//! - Entities wrapping them (Invitation, Round)
//! - Validated scalars (HoleScore, AllowancePercentage, MatchFormat, ...)
//! - Domain error types

pub mod error;
pub mod models;

pub use error::DomainError;
