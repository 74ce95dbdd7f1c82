//! Telegram handlers module
//!
//! Thin adapters between teloxide updates and the conversation flow engine.
//! Handlers extract a text event, run it through `flow::process` and send the
//! resulting reply; all conversation logic lives in the engine.

pub mod commands;
pub mod messages;

use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove};

use crate::flow::{self, Keyboard, Reply, SessionStore, TextEvent};
use crate::utils::errors::Result;

/// Run one conversation turn and deliver the reply
pub(crate) async fn run_turn(
    bot: &Bot,
    chat_id: ChatId,
    store: &dyn SessionStore,
    event: TextEvent,
) -> Result<()> {
    let transition = flow::process(store, &event);
    send_reply(bot, chat_id, transition.reply).await
}

/// Send a reply, attaching or clearing the suggestion keyboard
async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    match reply.keyboard {
        Keyboard::Suggestions {
            options,
            placeholder,
        } => {
            let row: Vec<KeyboardButton> = options.into_iter().map(KeyboardButton::new).collect();
            let markup = KeyboardMarkup::new(vec![row])
                .one_time_keyboard()
                .input_field_placeholder(placeholder);
            bot.send_message(chat_id, reply.text)
                .reply_markup(markup)
                .await?;
        }
        Keyboard::Remove => {
            bot.send_message(chat_id, reply.text)
                .reply_markup(KeyboardRemove::new())
                .await?;
        }
    }
    Ok(())
}
