//! Error types for the bot.
//!
//! `AppError` is the top-level error that wraps infrastructure failures (Discord API,
//! HTTP, filesystem, configuration). Domain flows such as rank transitions or the
//! recruit timer have their own error enums which carry the user-facing rejection
//! text and wrap `AppError` for anything that went wrong outside the domain rules.

pub mod announcement;
pub mod config;
pub mod recruit;
pub mod stats;
pub mod transition;

use thiserror::Error;

use crate::error::{config::ConfigError, stats::StatsError};

/// Generic failure text shown to a user when an infrastructure error interrupts a command.
pub const GENERIC_FAILURE_MESSAGE: &str = "Произошла ошибка при выполнении команды.";

/// Top-level application error type.
///
/// Aggregates all infrastructure errors that can occur while handling Discord events.
/// Handlers never propagate these to serenity; they are logged and replaced by a
/// generic message for the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Error talking to the external game-stats API.
    #[error(transparent)]
    StatsErr(#[from] StatsError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem error while reading or writing a JSON store.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed JSON in a store file or API payload.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// An expected Discord entity (member, role, channel) does not exist.
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
