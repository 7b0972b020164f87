//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration, Types, Errors
//! - Infrastructure: Matrix, Session Store, HTTP
//! - Application: Session Gate, Matcher, Weather/Ranking pipelines, Router, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ranking::RankingFetcher;
use crate::application::router::CommandRouter;
use crate::application::session::SessionGate;
use crate::application::weather::WeatherResolver;
use crate::domain::config::{AppConfig, SessionConfig};
use crate::domain::traits::SessionStore;
use crate::domain::types::Sender;
use crate::infrastructure::http::HttpFetcher;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "riven", about = "Chat assistant for weather and film rankings")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[cfg(feature = "redis")]
async fn open_session_store(config: &SessionConfig) -> Result<Arc<dyn SessionStore>> {
    let url = config.url();
    let store = crate::infrastructure::session::RedisSessionStore::connect(&url)
        .await
        .with_context(|| format!("Failed to connect to session store at {url}"))?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "redis"))]
async fn open_session_store(_config: &SessionConfig) -> Result<Arc<dyn SessionStore>> {
    tracing::warn!("Built without redis support, sessions are kept in memory");
    Ok(Arc::new(crate::infrastructure::session::MemorySessionStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config).context("Failed to load configuration")?;

    // 2. Logging Setup
    let _log_guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::STARTING);

    // 3. Credentials and catalog. Any gap here is fatal.
    let matrix_password = config.services.matrix.password()?;
    let weather_key = config.services.weather.api_key()?;
    let catalog = Arc::new(config.catalog()?);

    // 4. Session store must answer before we accept traffic
    let store = open_session_store(&config.session).await?;
    let sessions = Arc::new(
        SessionGate::connect(store, config.session.ttl())
            .await
            .context("Session store liveness check failed")?,
    );
    tracing::info!("{}", logs::store_connected(&config.session.url()));

    // 5. Resolvers
    let weather = Arc::new(WeatherResolver::new(
        Arc::new(HttpFetcher::new(true)?),
        &config.services.weather.endpoint,
        weather_key,
    ));
    // The listing page redirects away when it has nothing for us; treat that as a failure.
    let ranking = Arc::new(RankingFetcher::new(
        Arc::new(HttpFetcher::new(false)?),
        &config.services.ranking.endpoint,
    ));
    let router = Arc::new(CommandRouter::new(catalog, sessions, weather, ranking));

    // 6. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&config.services.matrix.username, &matrix_password)
        .send()
        .await?;

    tracing::info!("{}", logs::logged_in(&config.services.matrix.username));

    // 7. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Skip anything that piled up while we were offline
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };

            let body = text_content.body.clone();
            let sender = Sender::new(
                original_msg.sender.as_str(),
                Some(original_msg.sender.localpart().to_string()),
            );
            tracing::debug!("Received message from {}: {}", sender.id, body);

            // Each command runs on its own task.
            tokio::spawn(async move {
                let chat = MatrixService::new(room);
                if let Err(e) = router.route(&chat, &body, &sender).await {
                    tracing::error!("Failed to route message: {}", e);
                }
            });
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 8. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
