//! Router-level error taxonomy.
//!
//! Plumbing code (config, catalog parsing, file I/O) works with
//! `anyhow::Result`; anything that reaches the command router is classified
//! here so the router can decide between a user-facing reply and a logged
//! failure.

use std::time::Duration;

use thiserror::Error;

pub type BotResult<T> = Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("invalid history limit '{0}'")]
    InvalidHistoryLimit(String),

    #[error("no locale selected for this user")]
    NoLocaleSelected,

    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("record store failure: {0:#}")]
    Store(anyhow::Error),

    #[error("chat transport failure: {0}")]
    Transport(String),

    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BotError {
    /// True for errors caused by the user's own input. These are answered
    /// with a plain reply instead of being logged as failures.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            BotError::InvalidHistoryLimit(_) | BotError::NoLocaleSelected
        )
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}

/// Runs `future` under a deadline, mapping expiry to [`BotError::Timeout`].
pub async fn with_timeout<T, F>(operation: &'static str, after: Duration, future: F) -> BotResult<T>
where
    F: std::future::Future<Output = BotResult<T>>,
{
    match tokio::time::timeout(after, future).await {
        Ok(result) => result,
        Err(_) => Err(BotError::Timeout { operation, after }),
    }
}
