//! In-process session store. Keys expire passively: an expired entry is treated
//! as absent on the next read and dropped then.

use crate::domain::error::BotError;
use crate::domain::traits::SessionStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn ping(&self) -> Result<(), BotError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, BotError> {
        let mut guard = self.entries.lock().await;
        match guard.get(key) {
            Some((_, deadline)) if *deadline <= Instant::now() => {
                guard.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), BotError> {
        let mut guard = self.entries.lock().await;
        guard.insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, BotError> {
        let mut guard = self.entries.lock().await;
        let now = Instant::now();
        match guard.get(key) {
            Some((_, deadline)) if *deadline <= now => {
                guard.remove(key);
                Ok(None)
            }
            Some((_, deadline)) => Ok(Some(*deadline - now)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_set_get_and_expire() {
        let store = MemorySessionStore::new();
        assert!(store.ping().await.is_ok());
        assert_eq!(store.get("42").await.unwrap(), None);

        store
            .set_ex("42", Duration::from_secs(60), "active")
            .await
            .unwrap();
        assert_eq!(store.get("42").await.unwrap().as_deref(), Some("active"));
        assert_eq!(
            store.ttl("42").await.unwrap(),
            Some(Duration::from_secs(60))
        );

        tokio::time::advance(Duration::from_secs(45)).await;
        assert_eq!(
            store.ttl("42").await.unwrap(),
            Some(Duration::from_secs(15))
        );

        tokio::time::advance(Duration::from_secs(15)).await;
        assert_eq!(store.get("42").await.unwrap(), None);
        assert_eq!(store.ttl("42").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = MemorySessionStore::new();
        store
            .set_ex("a", Duration::from_secs(10), "active")
            .await
            .unwrap();
        assert_eq!(store.get("b").await.unwrap(), None);
        assert_eq!(store.ttl("b").await.unwrap(), None);
    }
}
