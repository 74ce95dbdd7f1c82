//! Command handlers
//!
//! Each Telegram command is fed to the flow engine as its canonical command
//! word, so commands and plain text follow the same conversation path.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;

use crate::flow::{SessionStore, TextEvent};
use crate::utils::errors::{Result, SiriHomesError};

/// Handle /start - greeting and command overview
pub async fn handle_start(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> Result<()> {
    run_command(bot, msg, store, "/start").await
}

/// Handle /tanker - begin a tanker tracking flow
pub async fn handle_tanker(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> Result<()> {
    run_command(bot, msg, store, "/tanker").await
}

/// Handle /expense - begin an expense logging flow
pub async fn handle_expense(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> Result<()> {
    run_command(bot, msg, store, "/expense").await
}

/// Handle /payment - begin a payment status flow
pub async fn handle_payment(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> Result<()> {
    run_command(bot, msg, store, "/payment").await
}

/// Handle /cancel - abandon the active flow
pub async fn handle_cancel(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> Result<()> {
    run_command(bot, msg, store, "/cancel").await
}

async fn run_command(
    bot: Bot,
    msg: Message,
    store: Arc<dyn SessionStore>,
    command: &str,
) -> Result<()> {
    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| SiriHomesError::InvalidInput("No user in message".to_string()))?;

    let event = TextEvent::new(user.id.0 as i64, user.first_name.clone(), command);
    super::run_turn(&bot, msg.chat.id, store.as_ref(), event).await
}
