//! # Weather Command
//!
//! Handles `/weather <place>`.

use crate::application::weather::WeatherResolver;
use crate::domain::error::BotError;
use crate::domain::types::Sender;
use crate::strings::{logs, messages};

/// Round to two decimals, halves to even, always printing at least one fractional
/// digit (`17.0`, `6.85`, `7.12`).
pub fn format_temperature(value: f64) -> String {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

pub async fn handle_weather(
    resolver: &WeatherResolver,
    sender: &Sender,
    place: &str,
) -> Result<String, BotError> {
    let reading = resolver.resolve(place).await?;
    tracing::info!("{}", logs::weather_requested(sender.display_name(), &sender.id));
    Ok(messages::weather_report(
        place,
        &reading.description,
        &format_temperature(reading.temp_max),
        &format_temperature(reading.temp_min),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::weather::kelvin_to_celsius;

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(17.0), "17.0");
        assert_eq!(format_temperature(-3.0), "-3.0");
        assert_eq!(format_temperature(6.5), "6.5");
        assert_eq!(format_temperature(6.849), "6.85");
        assert_eq!(format_temperature(0.001), "0.0");
    }

    #[test]
    fn test_format_temperature_halves_round_to_even() {
        assert_eq!(format_temperature(0.125), "0.12");
        assert_eq!(format_temperature(0.375), "0.38");
        assert_eq!(format_temperature(kelvin_to_celsius(280.125)), "7.12");
    }
}
