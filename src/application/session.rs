//! # Session Gate
//!
//! Tracks which users have started the bot. A session is a single key per user
//! holding `"active"` with a fixed lifetime; it is written once and never refreshed.
//! Expiry is left entirely to the store.

use crate::domain::error::BotError;
use crate::domain::traits::SessionStore;
use std::sync::Arc;
use std::time::Duration;

pub const SESSION_MARKER: &str = "active";

/// Result of a `/start` request.
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    Started,
    AlreadyActive { remaining: Duration },
}

pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl SessionGate {
    /// Wrap `store` after verifying it answers a liveness check.
    pub async fn connect(store: Arc<dyn SessionStore>, ttl: Duration) -> Result<Self, BotError> {
        store.ping().await?;
        Ok(Self { store, ttl })
    }

    pub async fn has_active_session(&self, user_id: &str) -> Result<bool, BotError> {
        Ok(self.store.get(user_id).await?.is_some())
    }

    /// Zero when the user has no session.
    pub async fn remaining_ttl(&self, user_id: &str) -> Result<Duration, BotError> {
        Ok(self.store.ttl(user_id).await?.unwrap_or_default())
    }

    pub async fn start_session(&self, user_id: &str) -> Result<(), BotError> {
        self.store.set_ex(user_id, self.ttl, SESSION_MARKER).await
    }

    /// Create a session if none exists; otherwise report the time left on it.
    ///
    /// Read-then-write without a transaction: two concurrent calls for the same
    /// user may both register.
    pub async fn start(&self, user_id: &str) -> Result<StartOutcome, BotError> {
        if self.has_active_session(user_id).await? {
            let remaining = self.remaining_ttl(user_id).await?;
            return Ok(StartOutcome::AlreadyActive { remaining });
        }
        self.start_session(user_id).await?;
        Ok(StartOutcome::Started)
    }
}
