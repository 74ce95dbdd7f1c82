//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Siri Homes bot.

use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::flow::EntryRecord;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must stay alive for the lifetime of the process,
/// otherwise buffered file output is lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "sirihomes.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an incoming user message with structured data
pub fn log_user_message(user_id: i64, display_name: &str, text: &str) {
    info!(
        user_id = user_id,
        display_name = display_name,
        text = text,
        "User message received"
    );
}

/// Log a completed entry record
///
/// Entries are not persisted anywhere; this log line is the only durable
/// trace of a completed flow.
pub fn log_entry_recorded(user_id: i64, entry: &EntryRecord) {
    match serde_json::to_string(entry) {
        Ok(json) => info!(user_id = user_id, entry = %json, "Entry recorded"),
        Err(e) => error!(user_id = user_id, error = %e, "Failed to serialize entry record"),
    }
}
