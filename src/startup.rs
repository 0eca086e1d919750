use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::google::{calendar::GoogleCalendar, sheets::SheetsClient};

/// Connects to the Sqlite database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_calendar_client(config: &Config) -> Arc<GoogleCalendar> {
    Arc::new(GoogleCalendar::new(
        config.google_api_token.clone(),
        config.calendar_id.clone(),
    ))
}

/// None when no roles sheet is configured.
pub fn setup_sheets_client(config: &Config) -> Option<Arc<SheetsClient>> {
    config.roles_sheet_id.as_ref().map(|sheet_id| {
        Arc::new(SheetsClient::new(
            config.google_api_token.clone(),
            sheet_id.clone(),
            config.roles_tab.clone(),
        ))
    })
}
