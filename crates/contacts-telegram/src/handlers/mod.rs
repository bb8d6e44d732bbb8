//! Telegram update handlers.
//!
//! The endpoints here only translate teloxide types into `contacts-core`
//! messaging types; the conversation itself lives in `commands` and
//! `callback` and talks to Telegram through the messaging port.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use contacts_core::{
    domain::{ChatId, MessageId, MessageRef},
    messaging::types,
};

use crate::router::AppState;

mod callback;
mod commands;
#[cfg(test)]
mod testing;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let query = types::CallbackQuery {
        callback_id: q.id.clone(),
        data: q.data.clone().unwrap_or_default(),
        message: q.message.as_ref().map(|m| MessageRef {
            chat_id: ChatId(m.chat.id.0),
            message_id: MessageId(m.id.0),
        }),
    };
    callback::handle_callback(&state, query).await;
    Ok(())
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if !text.starts_with('/') {
        return Ok(());
    }

    let (name, target) = commands::parse_command(text);
    let cmd = types::Command {
        chat_id: ChatId(msg.chat.id.0),
        name,
        target,
    };
    commands::handle_command(&state, cmd).await;
    Ok(())
}
