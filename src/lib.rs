//! Siri Homes Telegram Bot
//!
//! A Telegram bot for the Siri Homes residential community. It collects
//! structured maintenance input (tanker deliveries, association expenses,
//! flat payment statuses) through short multi-step conversations driven by a
//! transport-independent flow engine.

#![allow(non_snake_case)]

pub mod config;
pub mod flow;
pub mod handlers;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SiriHomesError};

// Re-export main components for easy access
pub use flow::{EntryRecord, FlowState, InMemorySessionStore, Session, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
