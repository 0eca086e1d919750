//! Error types for the bot.
//!
//! `AppError` is the top-level error type aggregating infrastructure failures
//! (database, Discord, Google HTTP, scheduler) behind `#[from]` conversions.
//! `WizardError` covers the event-creation flow's own failure taxonomy and is
//! converted to a short operator-visible message at the bot boundary; nothing
//! propagates far enough to crash the process.

pub mod config;
pub mod wizard;

use thiserror::Error;

use crate::error::{config::ConfigError, wizard::WizardError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error talking to the Google APIs.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed because serenity::Error is large and would inflate every other
    /// variant if stored inline.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Event-creation flow error.
    #[error(transparent)]
    WizardErr(#[from] WizardError),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error, boxing to keep AppError small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
