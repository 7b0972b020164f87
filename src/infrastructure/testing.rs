//! Test doubles for the infrastructure traits.

use crate::domain::error::BotError;
use crate::domain::traits::{ChatProvider, WebFetcher};
use async_trait::async_trait;
use std::sync::Mutex;

/// Serves canned bodies for URLs starting with a registered prefix and records
/// every requested URL.
#[derive(Default)]
pub struct StaticFetcher {
    routes: Vec<(String, String)>,
    pub requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, prefix: &str, body: &str) -> Self {
        self.routes.push((prefix.to_string(), body.to_string()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebFetcher for StaticFetcher {
    async fn get_text(&self, url: &str) -> Result<String, BotError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| BotError::Fetch(format!("404 Not Found: {url}")))
    }
}

/// Chat provider that keeps every sent message.
#[derive(Default)]
pub struct RecordingChat {
    pub sent: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn typing(&self, _active: bool) -> Result<(), String> {
        Ok(())
    }

    fn room_id(&self) -> String {
        "!test:example.org".to_string()
    }
}
