//! Free-text message handler
//!
//! Routes every non-command text message into the flow engine. Depending on
//! the user's session this is flow input (description, amount, flat, status)
//! or an unrecognized message answered from `Idle`.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;
use tracing::debug;

use crate::flow::{SessionStore, TextEvent};
use crate::utils::errors::{Result, SiriHomesError};

/// Handle an incoming text message
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    store: Arc<dyn SessionStore>,
) -> Result<()> {
    // Stickers, photos and other non-text content are ignored.
    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| SiriHomesError::InvalidInput("No user in message".to_string()))?;

    let event = TextEvent::new(user.id.0 as i64, user.first_name.clone(), text);
    super::run_turn(&bot, msg.chat.id, store.as_ref(), event).await
}
