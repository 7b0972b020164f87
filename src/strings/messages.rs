//! # Messages
//!
//! Constant strings and format functions for every reply the bot sends.

use std::time::Duration;

pub const GREETING: &str = concat!(
    "Hello! 😺 \n",
    "My name is Riven and that's my async bot!\n",
    "To see list of available commands type: /help"
);

pub fn already_started(remaining: Duration) -> String {
    if remaining == Duration::MAX {
        return "You've already started bot!\nYour session does not expire.".to_string();
    }
    format!(
        "You've already started bot!\nYour session will expire in: {} seconds.",
        remaining.as_secs()
    )
}

pub const WEATHER_NO_PLACE: &str = "Sorry, but no country or city was specified! :(";
pub const TOP_NO_GENRE: &str =
    "There is no filter for films object. Usage: /top <film genre>, see /help for genres.";

pub fn unknown_command(cmd: &str) -> String {
    format!("❓ Unknown command {cmd}. Type /help to see what I can do.")
}

pub const REQUEST_FAILED: &str = "Sorry, something went wrong while handling your request. Please try again later.";

pub fn weather_report(place: &str, description: &str, temp_max: &str, temp_min: &str) -> String {
    format!(
        "Weather for {place}:\nDescription: {description},\nMaximum temperature: {temp_max},\nMinimum temperature: {temp_min}"
    )
}

pub fn ranking_report(titles: &[String]) -> String {
    format!("Films by your request:\n\n{}", titles.join(",\n"))
}
