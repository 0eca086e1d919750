use chrono_tz::Tz;

use crate::error::{config::ConfigError, AppError};

/// Application configuration loaded from the environment.
///
/// All Discord and Google identifiers are supplied externally; the Google
/// bearer token is expected to be pre-issued (credential handling is a
/// deployment concern, not the bot's).
#[derive(Clone)]
pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub guild_id: u64,
    /// Channel or forum the event wizard posts summaries to, and the
    /// fallback target for reminders.
    pub event_channel_id: u64,

    /// Fixed named timezone all civil date/time input is resolved against.
    pub timezone: Tz,

    pub calendar_id: String,
    pub google_api_token: String,

    /// Spreadsheet backing the tag catalog and interest roles. Optional;
    /// without it the wizard falls back to the destination's own tags and
    /// the subscription commands accept any name.
    pub roles_sheet_id: Option<String>,
    pub roles_tab: String,

    /// Reminder lead time in minutes before an event's start.
    pub remind_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id: required_u64("GUILD_ID")?,
            event_channel_id: required_u64("EVENT_CHANNEL_ID")?,
            timezone: parse_timezone(
                &std::env::var("TZ").unwrap_or_else(|_| "America/Chicago".to_string()),
            )?,
            calendar_id: required("CALENDAR_ID")?,
            google_api_token: required("GOOGLE_API_TOKEN")?,
            roles_sheet_id: std::env::var("ROLES_SHEET_ID").ok().filter(|s| !s.is_empty()),
            roles_tab: std::env::var("ROLES_TAB_NAME").unwrap_or_else(|_| "Roles".to_string()),
            remind_minutes: optional_i64("REMIND_MINUTES", 60)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn required_u64(name: &str) -> Result<u64, ConfigError> {
    required(name)?
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn optional_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>().map_err(|_| ConfigError::InvalidEnvVar {
        name: "TZ".to_string(),
        reason: format!("unknown timezone '{}'", name),
    })
}
