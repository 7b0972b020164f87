//! # Domain Traits
//!
//! Abstract interfaces for the collaborators the bot talks to (chat transport,
//! session store, web). Implementations live in the Infrastructure layer.

use crate::domain::error::BotError;
use async_trait::async_trait;
use std::time::Duration;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Key-value store with per-key expiry, backing the session gate.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Liveness check.
    async fn ping(&self) -> Result<(), BotError>;

    async fn get(&self, key: &str) -> Result<Option<String>, BotError>;

    /// Store `value` under `key`, expiring after `ttl`.
    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), BotError>;

    /// Remaining lifetime of `key`, or `None` if the key does not exist.
    /// A key without an expiry reports `Duration::MAX`.
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, BotError>;
}

/// Plain HTTP GET returning the response body.
#[async_trait]
pub trait WebFetcher: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, BotError>;
}
