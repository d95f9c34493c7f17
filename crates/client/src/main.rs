use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use ryder_cup_client::config::Config;
use ryder_cup_client::logging::init_logging;
use ryder_cup_client::repositories::HttpBackend;
use ryder_cup_client::services::{InvitationService, RoundService, SendInvitation};
use ryder_cup_client::ClientError;

mod cli;

use cli::{Cli, Command, InvitationCommand, RoundCommand};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load()?;

    init_logging(&config.logging);

    info!("Starting ryder-cup v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(HttpBackend::new(&config.backend)?);

    if let Err(err) = run(cli.command, backend).await {
        error!(error = %err, "Command failed");
        anyhow::bail!(err.user_message());
    }

    Ok(())
}

async fn run(command: Command, backend: Arc<HttpBackend>) -> Result<(), ClientError> {
    match command {
        Command::Invitation(command) => {
            let service = InvitationService::new(backend);
            match command {
                InvitationCommand::Show { id } => {
                    print_json(&service.get(&id).await?.to_persistence())
                }
                InvitationCommand::List { competition } => {
                    let records: Vec<_> = service
                        .list_for_competition(&competition)
                        .await?
                        .iter()
                        .map(|i| i.to_persistence())
                        .collect();
                    print_json(&records)
                }
                InvitationCommand::Send {
                    competition,
                    inviter,
                    email,
                    user,
                    message,
                    expires_in_days,
                } => {
                    let sent = service
                        .send(SendInvitation {
                            competition_id: competition,
                            inviter_id: inviter,
                            invitee_email: email,
                            invitee_user_id: user,
                            personal_message: message,
                            expires_in_days,
                        })
                        .await?;
                    print_json(&sent.to_persistence())
                }
                InvitationCommand::Accept { id } => {
                    print_json(&service.accept(&id).await?.to_persistence())
                }
                InvitationCommand::Decline { id } => {
                    print_json(&service.decline(&id).await?.to_persistence())
                }
            }
        }
        Command::Round(command) => {
            let service = RoundService::new(backend);
            let rounds = match command {
                RoundCommand::Show { id } => {
                    return print_json(&service.get(&id).await?.to_persistence());
                }
                RoundCommand::List { competition } => {
                    service.list_for_competition(&competition).await?
                }
                RoundCommand::Editable { competition } => {
                    service.editable_rounds(&competition).await?
                }
            };
            let records: Vec<_> = rounds.iter().map(|r| r.to_persistence()).collect();
            print_json(&records)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::InvalidRequest(format!("Failed to encode output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
