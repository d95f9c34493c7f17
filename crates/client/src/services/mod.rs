//! Use cases invoked by the command line front end.
//!
//! Services own the domain decisions; repositories only move data.

pub mod invitations;
pub mod rounds;

pub use invitations::{InvitationResponse, InvitationService, SendInvitation};
pub use rounds::RoundService;
