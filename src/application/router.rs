//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the message into a `Command`, dispatches it, and turns any failure into a
//! reply that is safe to show the user.

use anyhow::Result;
use std::sync::Arc;

use crate::application::ranking::RankingFetcher;
use crate::application::session::SessionGate;
use crate::application::weather::WeatherResolver;
use crate::domain::error::BotError;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Catalog, Command, Sender};
use crate::interface::commands;
use crate::strings::{logs, messages};

pub struct CommandRouter {
    catalog: Arc<Catalog>,
    sessions: Arc<SessionGate>,
    weather: Arc<WeatherResolver>,
    ranking: Arc<RankingFetcher>,
}

impl CommandRouter {
    pub fn new(
        catalog: Arc<Catalog>,
        sessions: Arc<SessionGate>,
        weather: Arc<WeatherResolver>,
        ranking: Arc<RankingFetcher>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            weather,
            ranking,
        }
    }

    /// Reply text for `message`, or `None` when the message is not a command.
    pub async fn reply(&self, message: &str, sender: &Sender) -> Option<String> {
        let command = match Command::parse(message) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => return Some(e.to_string()),
        };

        tracing::info!("{}", logs::dispatching(command.name(), &sender.id));

        match self.dispatch(&command, sender).await {
            Ok(reply) => Some(reply),
            Err(e) if e.is_user_facing() => Some(e.to_string()),
            Err(e) => {
                tracing::error!(
                    "{}",
                    logs::request_failed(command.name(), &sender.id, &e.to_string())
                );
                Some(messages::REQUEST_FAILED.to_string())
            }
        }
    }

    async fn dispatch(&self, command: &Command, sender: &Sender) -> Result<String, BotError> {
        match command {
            Command::Help => Ok(commands::help::handle_help(&self.catalog)),
            Command::Start => commands::start::handle_start(&self.sessions, sender).await,
            Command::Weather { place } => {
                commands::weather::handle_weather(&self.weather, sender, place).await
            }
            Command::Top { genre } => {
                commands::top::handle_top(&self.catalog, &self.ranking, sender, genre).await
            }
            Command::Unknown(name) => Ok(messages::unknown_command(name)),
        }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &Sender) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        let is_command = message.trim_start().starts_with('/');
        if is_command {
            let _ = chat.typing(true).await;
        }

        let reply = self.reply(message, sender).await;

        if is_command {
            let _ = chat.typing(false).await;
        }

        if let Some(text) = reply {
            chat.send_message(&text)
                .await
                .map_err(|e| anyhow::anyhow!(logs::send_failed(&chat.room_id(), &e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ranking::RANK_COUNT;
    use crate::application::ranking::tests::listing_page;
    use crate::domain::config::DEFAULT_SESSION_TTL;
    use crate::domain::types::default_genres;
    use crate::infrastructure::session::MemorySessionStore;
    use crate::infrastructure::testing::{RecordingChat, StaticFetcher};

    const WEATHER: &str = "http://weather.test/data/2.5";
    const TOP: &str = "https://top.test/id_genre";

    async fn router(fetcher: Arc<StaticFetcher>) -> CommandRouter {
        let catalog = Arc::new(Catalog::new(default_genres()).unwrap());
        let sessions = Arc::new(
            SessionGate::connect(Arc::new(MemorySessionStore::new()), DEFAULT_SESSION_TTL)
                .await
                .unwrap(),
        );
        let weather = Arc::new(WeatherResolver::new(
            fetcher.clone(),
            WEATHER,
            "KEY".to_string(),
        ));
        let ranking = Arc::new(RankingFetcher::new(fetcher, TOP));
        CommandRouter::new(catalog, sessions, weather, ranking)
    }

    fn alice() -> Sender {
        Sender::new("@alice:example.org", Some("alice".to_string()))
    }

    #[tokio::test]
    async fn test_weather_end_to_end() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .route(
                    &format!("{WEATHER}/find?"),
                    r#"{"list":[{"id":42,"name":"Paris","sys":{"country":"FR"}}]}"#,
                )
                .route(
                    &format!("{WEATHER}/weather?"),
                    r#"{"weather":[{"description":"clear sky"}],"main":{"temp_min":280,"temp_max":290}}"#,
                ),
        );
        let reply = router(fetcher).await.reply("/weather Paris", &alice()).await.unwrap();
        assert!(reply.contains("clear sky"));
        assert!(reply.contains("Maximum temperature: 17.0"));
        assert!(reply.contains("Minimum temperature: 7.0"));
        assert!(reply.starts_with("Weather for Paris:"));
    }

    #[tokio::test]
    async fn test_top_matches_genre_and_lists_titles() {
        let fetcher = Arc::new(
            StaticFetcher::new().route(&format!("{TOP}/1/"), &listing_page(1..=RANK_COUNT)),
        );
        let router = router(fetcher.clone()).await;
        let reply = router.reply("/top Horror", &alice()).await.unwrap();

        assert!(reply.starts_with("Films by your request:\n\nFilm 1,\nFilm 2,\n"));
        assert!(reply.ends_with("Film 20"));
        assert_eq!(fetcher.requested(), vec![format!("{TOP}/1/")]);
    }

    #[tokio::test]
    async fn test_failures_become_generic_reply() {
        let mut page = listing_page((1..=RANK_COUNT).filter(|n| *n != 15));
        page.push_str("<!-- truncated -->");
        let fetcher = Arc::new(
            StaticFetcher::new()
                .route(&format!("{TOP}/8/"), &page)
                .route(&format!("{WEATHER}/find?"), r#"{"list":[]}"#),
        );
        let router = router(fetcher).await;

        let reply = router.reply("/top dramas", &alice()).await.unwrap();
        assert_eq!(reply, messages::REQUEST_FAILED);

        let reply = router.reply("/weather Atlantis", &alice()).await.unwrap();
        assert_eq!(reply, messages::REQUEST_FAILED);
    }

    #[tokio::test]
    async fn test_missing_argument_skips_resolvers() {
        let fetcher = Arc::new(StaticFetcher::new());
        let router = router(fetcher.clone()).await;

        assert_eq!(
            router.reply("/weather", &alice()).await.unwrap(),
            messages::WEATHER_NO_PLACE
        );
        assert_eq!(
            router.reply("/top   ", &alice()).await.unwrap(),
            messages::TOP_NO_GENRE
        );
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn test_start_help_unknown_and_plain_text() {
        let router = router(Arc::new(StaticFetcher::new())).await;

        assert_eq!(
            router.reply("/start", &alice()).await.unwrap(),
            messages::GREETING
        );
        assert!(
            router
                .reply("/start", &alice())
                .await
                .unwrap()
                .starts_with("You've already started bot!")
        );
        assert!(router.reply("/help", &alice()).await.unwrap().contains("Horrors"));
        assert_eq!(
            router.reply("/dance", &alice()).await.unwrap(),
            messages::unknown_command("/dance")
        );
        assert_eq!(router.reply("good morning", &alice()).await, None);
    }

    #[tokio::test]
    async fn test_route_sends_reply_through_chat() {
        let router = router(Arc::new(StaticFetcher::new())).await;
        let chat = RecordingChat::default();

        router.route(&chat, "/help", &alice()).await.unwrap();
        router.route(&chat, "just chatting", &alice()).await.unwrap();

        let sent = chat.messages();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("List of available commands"));
    }
}
