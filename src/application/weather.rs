//! # Weather Resolver
//!
//! Two sequential round-trips against the weather provider:
//! 1. `find` turns a free-text place into the provider's location id (first hit wins).
//! 2. `weather` fetches current conditions for the place and that id.
//!
//! Temperatures arrive in Kelvin and are reported as `kelvin - 273`.

use crate::domain::error::BotError;
use crate::domain::traits::WebFetcher;
use crate::domain::types::{LocationCandidate, WeatherReading};
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;

/// Offset used for Kelvin to Celsius. Kept at 273, not 273.15, so readings match
/// what users have always been shown.
pub const KELVIN_OFFSET: f64 = 273.0;

#[derive(Debug, Deserialize)]
struct FindResponse {
    list: Vec<FindEntry>,
}

#[derive(Debug, Deserialize)]
struct FindEntry {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: FindSys,
}

#[derive(Debug, Default, Deserialize)]
struct FindSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp_min: f64,
    temp_max: f64,
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Parse the `find` response into its candidate places, in provider order.
pub fn parse_candidates(body: &str) -> Result<Vec<LocationCandidate>, BotError> {
    let response: FindResponse = serde_json::from_str(body)?;
    Ok(response
        .list
        .into_iter()
        .map(|e| LocationCandidate {
            id: e.id,
            name: e.name,
            country: e.sys.country,
        })
        .collect())
}

/// Parse the `weather` response, converting temperatures to Celsius.
pub fn parse_reading(body: &str) -> Result<WeatherReading, BotError> {
    let response: CurrentResponse = serde_json::from_str(body)?;
    let description = response
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .ok_or_else(|| BotError::Parse("weather list is empty".to_string()))?;
    Ok(WeatherReading {
        description,
        temp_min: kelvin_to_celsius(response.main.temp_min),
        temp_max: kelvin_to_celsius(response.main.temp_max),
    })
}

pub struct WeatherResolver {
    fetcher: Arc<dyn WebFetcher>,
    endpoint: String,
    api_key: String,
}

impl WeatherResolver {
    pub fn new(fetcher: Arc<dyn WebFetcher>, endpoint: &str, api_key: String) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn find_url(&self, place: &str) -> Result<Url, BotError> {
        Url::parse_with_params(
            &format!("{}/find", self.endpoint),
            &[("q", place), ("type", "like"), ("APPID", self.api_key.as_str())],
        )
        .map_err(|e| BotError::Configuration(format!("invalid weather endpoint: {e}")))
    }

    fn weather_url(&self, place: &str, location_id: u64) -> Result<Url, BotError> {
        Url::parse_with_params(
            &format!("{}/weather", self.endpoint),
            &[
                ("q", format!("{place},{location_id}").as_str()),
                ("appid", self.api_key.as_str()),
            ],
        )
        .map_err(|e| BotError::Configuration(format!("invalid weather endpoint: {e}")))
    }

    /// Disambiguation phase: the first candidate the provider suggests.
    pub async fn find_location(&self, place: &str) -> Result<LocationCandidate, BotError> {
        let body = self.fetcher.get_text(self.find_url(place)?.as_str()).await?;
        let candidates = parse_candidates(&body)?;
        tracing::debug!(
            "Candidates for '{}': {:?}",
            place,
            candidates
                .iter()
                .map(|c| format!("{} ({})", c.name, c.country))
                .collect::<Vec<_>>()
        );
        candidates
            .into_iter()
            .next()
            .ok_or_else(|| BotError::Parse(format!("no locations returned for '{place}'")))
    }

    /// Detail phase.
    pub async fn current_conditions(
        &self,
        place: &str,
        location_id: u64,
    ) -> Result<WeatherReading, BotError> {
        let url = self.weather_url(place, location_id)?;
        let body = self.fetcher.get_text(url.as_str()).await?;
        parse_reading(&body)
    }

    pub async fn resolve(&self, place: &str) -> Result<WeatherReading, BotError> {
        let location = self.find_location(place).await?;
        self.current_conditions(place, location.id).await
    }
}
