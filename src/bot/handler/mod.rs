use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::config::Config;
use crate::google::calendar::GoogleCalendar;
use crate::google::sheets::SheetsClient;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Config,
    pub calendar: Arc<GoogleCalendar>,
    /// None when no roles sheet is configured; tag options and subscription
    /// validation then degrade as documented on [`crate::config::Config`].
    pub sheets: Option<Arc<SheetsClient>>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        calendar: Arc<GoogleCalendar>,
        sheets: Option<Arc<SheetsClient>>,
    ) -> Self {
        Self {
            db,
            config,
            calendar,
            sheets,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called for every slash command, component click, and modal submit
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
