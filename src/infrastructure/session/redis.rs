//! Redis-backed session store (`PING`, `GET`, `SETEX`, `TTL`).

use crate::domain::error::BotError;
use crate::domain::traits::SessionStore;
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::time::Duration;

#[derive(Clone)]
pub struct RedisSessionStore {
    manager: ConnectionManager,
}

impl RedisSessionStore {
    /// Open a managed connection. Fails if the server cannot be reached.
    pub async fn connect(url: &str) -> Result<Self, BotError> {
        let client = redis::Client::open(url)
            .map_err(|e| BotError::Configuration(format!("invalid redis url {url}: {e}")))?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn ping(&self) -> Result<(), BotError> {
        let mut conn = self.manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, BotError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), BotError> {
        let mut conn = self.manager.clone();
        let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, BotError> {
        let mut conn = self.manager.clone();
        let secs: i64 = conn.ttl(key).await?;
        Ok(ttl_from_reply(secs))
    }
}

/// Decode a `TTL` reply: -2 is a missing key, -1 a key that never expires.
fn ttl_from_reply(secs: i64) -> Option<Duration> {
    match secs {
        -1 => Some(Duration::MAX),
        s if s < 0 => None,
        s => Some(Duration::from_secs(s as u64)),
    }
}
