//! # Errors
//!
//! The error taxonomy shared by every layer. Resolver and store failures travel up
//! to the router unchanged; only the router decides what the user gets to see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// A required setting or credential is missing or unusable. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The session backing store could not be reached.
    #[error("session store unavailable: {0}")]
    StoreUnavailable(String),

    /// The weather provider answered with something we could not interpret.
    #[error("malformed provider response: {0}")]
    Parse(String),

    /// The ranking page did not have the expected structure.
    #[error("ranking extraction failed: {0}")]
    Extraction(String),

    /// The user's command was incomplete. The payload is the corrective reply.
    #[error("{0}")]
    UserInput(String),

    /// Network-level failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Fetch(String),
}

impl BotError {
    /// Whether the message may be shown to the user verbatim.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, BotError::UserInput(_))
    }
}

impl From<serde_json::Error> for BotError {
    fn from(e: serde_json::Error) -> Self {
        BotError::Parse(e.to_string())
    }
}

#[cfg(feature = "redis")]
impl From<redis::RedisError> for BotError {
    fn from(e: redis::RedisError) -> Self {
        BotError::StoreUnavailable(e.to_string())
    }
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        BotError::Fetch(e.to_string())
    }
}
