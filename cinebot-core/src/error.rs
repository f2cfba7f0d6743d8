//! Error types for the bot core.

use thiserror::Error;

/// Errors raised while talking to the messaging transport.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Invalid photo url: {0}")]
    InvalidPhotoUrl(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
