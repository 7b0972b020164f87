//! # Ranking Fetcher
//!
//! Fetches a genre's top list and pulls the titles out of fixed rank slots. The
//! page always renders a top-20 table, so every slot must be present: a single
//! missing row or title link fails the whole extraction.

use crate::domain::error::BotError;
use crate::domain::traits::WebFetcher;
use scraper::{Html, Selector};
use std::sync::Arc;

/// Number of rank slots on a listing page.
pub const RANK_COUNT: usize = 20;

fn row_selector(rank: usize) -> Result<Selector, BotError> {
    Selector::parse(&format!("tr#top250_place_{rank}"))
        .map_err(|e| BotError::Extraction(format!("bad row selector for rank {rank}: {e:?}")))
}

/// Titles for ranks `1..=count`, in rank order.
pub fn extract_titles(html: &str, count: usize) -> Result<Vec<String>, BotError> {
    let document = Html::parse_document(html);
    let link = Selector::parse("a.all")
        .map_err(|e| BotError::Extraction(format!("bad link selector: {e:?}")))?;

    (1..=count)
        .map(|rank| -> Result<String, BotError> {
            let row = document
                .select(&row_selector(rank)?)
                .next()
                .ok_or_else(|| BotError::Extraction(format!("rank {rank} row not found")))?;
            let anchor = row
                .select(&link)
                .next()
                .ok_or_else(|| BotError::Extraction(format!("rank {rank} has no title link")))?;
            Ok(anchor.text().collect::<String>().trim().to_string())
        })
        .collect()
}

pub struct RankingFetcher {
    fetcher: Arc<dyn WebFetcher>,
    endpoint: String,
}

impl RankingFetcher {
    pub fn new(fetcher: Arc<dyn WebFetcher>, endpoint: &str) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn listing_url(&self, code: &str) -> String {
        format!("{}/{}/", self.endpoint, code)
    }

    pub async fn fetch_ranking(&self, code: &str) -> Result<Vec<String>, BotError> {
        let url = self.listing_url(code);
        tracing::debug!("Fetching ranking page {}", url);
        let body = self.fetcher.get_text(&url).await?;
        extract_titles(&body, RANK_COUNT)
    }
}
