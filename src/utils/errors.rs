//! Error handling for the Siri Homes bot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Siri Homes bot
#[derive(Error, Debug)]
pub enum SiriHomesError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Siri Homes bot operations
pub type Result<T> = std::result::Result<T, SiriHomesError>;

impl SiriHomesError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SiriHomesError::Telegram(_) => true,
            SiriHomesError::Config(_) => false,
            SiriHomesError::Serialization(_) => false,
            SiriHomesError::Io(_) => true,
            SiriHomesError::InvalidInput(_) => false,
        }
    }
}
