//! # Domain Types
//!
//! Common data structures used across the application logic.

use crate::domain::error::BotError;
use serde::Deserialize;

/// Who sent a command. The username is only ever used for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Sender {
    pub id: String,
    pub username: Option<String>,
}

impl Sender {
    pub fn new(id: impl Into<String>, username: Option<String>) -> Self {
        Self {
            id: id.into(),
            username,
        }
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("<unknown>")
    }
}

/// A parsed inbound command. Arguments have all whitespace removed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Start,
    Weather { place: String },
    Top { genre: String },
    Unknown(String),
}

impl Command {
    /// Parse a message into a command.
    ///
    /// Returns `Ok(None)` for text that is not a command at all, and
    /// `Err(BotError::UserInput)` when a command is missing its argument.
    pub fn parse(text: &str) -> Result<Option<Command>, BotError> {
        let msg = text.trim();
        if !msg.starts_with('/') {
            return Ok(None);
        }

        let (cmd, rest) = match msg.find(char::is_whitespace) {
            Some(idx) => (&msg[..idx], &msg[idx..]),
            None => (msg, ""),
        };
        let arg: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

        let command = match cmd {
            "/help" => Command::Help,
            "/start" => Command::Start,
            "/weather" => {
                if arg.is_empty() {
                    return Err(BotError::UserInput(
                        crate::strings::messages::WEATHER_NO_PLACE.to_string(),
                    ));
                }
                Command::Weather { place: arg }
            }
            "/top" => {
                if arg.is_empty() {
                    return Err(BotError::UserInput(
                        crate::strings::messages::TOP_NO_GENRE.to_string(),
                    ));
                }
                Command::Top {
                    genre: arg.to_lowercase(),
                }
            }
            other => Command::Unknown(other.to_string()),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Help => "/help",
            Command::Start => "/start",
            Command::Weather { .. } => "/weather",
            Command::Top { .. } => "/top",
            Command::Unknown(name) => name,
        }
    }
}

/// One category name mapped to the provider's code for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub code: String,
}

impl CatalogEntry {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            code: code.to_string(),
        }
    }
}

/// Ordered, non-empty list of categories. Order is the tie-break precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, BotError> {
        if entries.is_empty() {
            return Err(BotError::Configuration(
                "category catalog must not be empty".to_string(),
            ));
        }
        let entries = entries
            .into_iter()
            .map(|e| CatalogEntry::new(&e.name, &e.code))
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// Film genres understood by the ranking provider.
pub fn default_genres() -> Vec<CatalogEntry> {
    [
        ("horrors", "1"),
        ("fantastic", "2"),
        ("shooters", "3"),
        ("thrillers", "4"),
        ("comedy", "6"),
        ("melodramas", "7"),
        ("dramas", "8"),
    ]
    .into_iter()
    .map(|(name, code)| CatalogEntry::new(name, code))
    .collect()
}

/// A place returned by the weather provider's search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    pub id: u64,
    pub name: String,
    pub country: String,
}

/// Current conditions, temperatures already in Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub description: String,
    pub temp_min: f64,
    pub temp_max: f64,
}
