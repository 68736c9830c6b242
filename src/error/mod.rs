//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by startup, the data layer and
//! command handlers. Domain-specific errors live in their own submodules and are
//! converted with `#[from]`. Errors that reach a command handler are logged and the
//! requester only sees a generic failure reply, so nothing here carries
//! user-facing wording except `VerificationError`.

pub mod config;
pub mod verification;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process exits with a non-zero status.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Filesystem error while reading or writing the JSON log files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON serialization error for log records or the rate limit table.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    ///
    /// Used for states that indicate a bug or a cache that is not yet populated,
    /// such as the configured guild missing from the Serenity cache.
    #[error("{0}")]
    InternalError(String),
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
