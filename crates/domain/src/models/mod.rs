//! Domain models for Ryder Cup Manager.

pub mod allowance_percentage;
pub mod handicap_mode;
pub mod hole_score;
pub mod invitation;
pub mod invitation_status;
pub mod match_format;
pub mod round;
pub mod round_status;
pub mod session_type;
pub mod status;

pub use allowance_percentage::AllowancePercentage;
pub use handicap_mode::HandicapMode;
pub use hole_score::HoleScore;
pub use invitation::{Invitation, InvitationRecord, NewInvitation};
pub use invitation_status::InvitationStatus;
pub use match_format::MatchFormat;
pub use round::{MatchRef, NewRound, Round, RoundRecord};
pub use round_status::RoundStatus;
pub use session_type::SessionType;
pub use status::StatusLifecycle;
