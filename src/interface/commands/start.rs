//! # Start Command
//!
//! Handles the `/start` command: registers the user's session on first use,
//! otherwise reports how long the existing session has left.

use crate::application::session::{SessionGate, StartOutcome};
use crate::domain::error::BotError;
use crate::domain::types::Sender;
use crate::strings::{logs, messages};

pub async fn handle_start(gate: &SessionGate, sender: &Sender) -> Result<String, BotError> {
    match gate.start(&sender.id).await? {
        StartOutcome::AlreadyActive { remaining } => Ok(messages::already_started(remaining)),
        StartOutcome::Started => {
            tracing::info!("{}", logs::user_registered(sender.display_name(), &sender.id));
            Ok(messages::GREETING.to_string())
        }
    }
}
