//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the chat transport, the external data providers, the session
//! store, the genre catalog and logging.

use crate::domain::error::BotError;
use crate::domain::types::{Catalog, CatalogEntry, default_genres};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Lifetime of a session created by `/start`.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(10 * SECS_PER_DAY);

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default = "default_genres")]
    pub catalog: Vec<CatalogEntry>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, BotError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BotError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, BotError> {
        serde_yaml::from_str(content)
            .map_err(|e| BotError::Configuration(format!("failed to parse config: {e}")))
    }

    /// The immutable, validated category catalog.
    pub fn catalog(&self) -> Result<Catalog, BotError> {
        Catalog::new(self.catalog.clone())
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
    pub weather: WeatherConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_env: Option<String>, // e.g. "MATRIX_PASSWORD"
    pub homeserver: String,
}

impl MatrixConfig {
    pub fn password(&self) -> Result<String, BotError> {
        resolve_secret("matrix password", &self.password, &self.password_env)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>, // e.g. "OPENWEATHER_API_KEY"
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
}

impl WeatherConfig {
    pub fn api_key(&self) -> Result<String, BotError> {
        resolve_secret("weather api key", &self.api_key, &self.api_key_env)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    #[serde(default = "default_ranking_endpoint")]
    pub endpoint: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_ranking_endpoint(),
        }
    }
}

/// Where the session store lives and how long a session lasts.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_session_host")]
    pub host: String,
    #[serde(default = "default_session_port")]
    pub port: u16,
    #[serde(default)]
    pub db: u8,
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: default_session_host(),
            port: default_session_port(),
            db: 0,
            ttl_days: default_ttl_days(),
        }
    }
}

impl SessionConfig {
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_days * SECS_PER_DAY)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

fn default_weather_endpoint() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}
fn default_ranking_endpoint() -> String {
    "https://www.kinopoisk.ru/top/id_genre".to_string()
}
fn default_session_host() -> String {
    "localhost".to_string()
}
fn default_session_port() -> u16 {
    6379
}
fn default_ttl_days() -> u64 {
    DEFAULT_SESSION_TTL.as_secs() / SECS_PER_DAY
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_log_file() -> String {
    "riven.log".to_string()
}
fn default_log_filter() -> String {
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn"
        .to_string()
}

/// Inline value first, then the named environment variable.
fn resolve_secret(
    what: &str,
    value: &Option<String>,
    env_var: &Option<String>,
) -> Result<String, BotError> {
    if let Some(v) = value.as_ref().filter(|v| !v.is_empty()) {
        return Ok(v.clone());
    }
    if let Some(var) = env_var {
        return std::env::var(var)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BotError::Configuration(format!("{what}: env var {var} not set")));
    }
    Err(BotError::Configuration(format!(
        "no {what} provided - set it inline or via an env var"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
services:
  matrix:
    username: riven
    password: hunter2
    homeserver: https://matrix.example.org
  weather:
    api_key: abc123
"#;

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.session.url(), "redis://localhost:6379/0");
        assert_eq!(config.session.ttl(), Duration::from_secs(10 * 86_400));
        assert_eq!(config.session.ttl(), DEFAULT_SESSION_TTL);
        assert_eq!(
            config.services.weather.endpoint,
            "http://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.logging.dir, "logs");

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.entries().len(), 7);
        assert_eq!(catalog.entries()[0], CatalogEntry::new("horrors", "1"));
        assert_eq!(catalog.entries()[4], CatalogEntry::new("comedy", "6"));
    }

    #[test]
    fn test_inline_secrets() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.services.matrix.password().unwrap(), "hunter2");
        assert_eq!(config.services.weather.api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let yaml = r#"
services:
  matrix:
    username: riven
    homeserver: https://matrix.example.org
  weather:
    api_key_env: RIVEN_TEST_SURELY_UNSET_VAR
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert!(matches!(
            config.services.matrix.password(),
            Err(BotError::Configuration(_))
        ));
        assert!(matches!(
            config.services.weather.api_key(),
            Err(BotError::Configuration(_))
        ));
    }

    #[test]
    fn test_custom_catalog_and_session() {
        let yaml = format!(
            "{MINIMAL}session:\n  host: cache\n  port: 6380\n  db: 2\n  ttl_days: 1\ncatalog:\n  - name: Dramas\n    code: \"8\"\n"
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.session.url(), "redis://cache:6380/2");
        assert_eq!(config.session.ttl(), Duration::from_secs(86_400));
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.entries(), &[CatalogEntry::new("dramas", "8")]);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let yaml = format!("{MINIMAL}catalog: []\n");
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert!(matches!(config.catalog(), Err(BotError::Configuration(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.services.matrix.username, "riven");

        let missing = AppConfig::load(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(missing, Err(BotError::Configuration(_))));
    }
}
