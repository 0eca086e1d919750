use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use tracing::info;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::google::calendar::GoogleCalendar;
use crate::google::sheets::SheetsClient;

/// Builds the Discord client and hands back its HTTP handle so the reminder
/// scheduler can send messages over the same connection pool.
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    calendar: Arc<GoogleCalendar>,
    sheets: Option<Arc<SheetsClient>>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(db, config.clone(), calendar, sheets);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the gateway connection. Blocks until shutdown, so call it from its
/// own task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
