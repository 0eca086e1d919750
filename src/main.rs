mod bot;
mod config;
mod data;
mod error;
mod google;
mod model;
mod scheduler;
mod startup;
mod util;
mod wizard;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let calendar = startup::setup_calendar_client(&config);
    let sheets = startup::setup_sheets_client(&config);

    info!("Starting event bot");

    let (client, discord_http) =
        bot::start::init_bot(&config, db.clone(), calendar.clone(), sheets).await?;

    let scheduler_db = db.clone();
    let scheduler_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) =
            scheduler::reminders::start_scheduler(scheduler_db, discord_http, calendar, scheduler_config)
                .await
        {
            error!("Reminder scheduler error: {}", e);
        }
    });

    bot::start::start_bot(client).await?;

    Ok(())
}
