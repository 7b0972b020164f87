//! # Top Command
//!
//! Handles `/top <genre>`: matches the genre against the catalog and replies with
//! the genre's ranked titles.

use crate::application::matcher;
use crate::application::ranking::RankingFetcher;
use crate::domain::error::BotError;
use crate::domain::types::{Catalog, Sender};
use crate::strings::{logs, messages};

pub async fn handle_top(
    catalog: &Catalog,
    ranking: &RankingFetcher,
    sender: &Sender,
    genre: &str,
) -> Result<String, BotError> {
    let code = matcher::match_code(genre, catalog);
    tracing::info!(
        "{}",
        logs::ranking_requested(sender.display_name(), &sender.id, genre, code)
    );
    let titles = ranking.fetch_ranking(code).await?;
    Ok(messages::ranking_report(&titles))
}
