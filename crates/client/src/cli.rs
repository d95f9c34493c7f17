//! Command line definition.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ryder-cup", version, about = "Manage Ryder Cup style golf competitions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send, inspect and answer competition invitations
    #[command(subcommand)]
    Invitation(InvitationCommand),

    /// Inspect competition rounds
    #[command(subcommand)]
    Round(RoundCommand),
}

#[derive(Debug, Subcommand)]
pub enum InvitationCommand {
    /// Show a single invitation
    Show { id: String },

    /// List the invitations of a competition
    List {
        #[arg(long)]
        competition: String,
    },

    /// Invite a player to a competition
    Send {
        #[arg(long)]
        competition: String,

        /// Id of the user sending the invitation
        #[arg(long)]
        inviter: String,

        #[arg(long)]
        email: String,

        /// Id of the invitee, if they already have an account
        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        message: Option<String>,

        #[arg(long)]
        expires_in_days: Option<i64>,
    },

    /// Accept a pending invitation
    Accept { id: String },

    /// Decline a pending invitation
    Decline { id: String },
}

#[derive(Debug, Subcommand)]
pub enum RoundCommand {
    /// Show a single round
    Show { id: String },

    /// List the rounds of a competition in playing order
    List {
        #[arg(long)]
        competition: String,
    },

    /// List rounds whose teams or matches can still be changed
    Editable {
        #[arg(long)]
        competition: String,
    },
}
