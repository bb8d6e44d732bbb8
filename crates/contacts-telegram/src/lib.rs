//! Telegram adapter (teloxide).
//!
//! This crate implements the `contacts-core` MessagingPort over Telegram Bot API
//! and hosts the conversation router.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    ApiError, RequestError,
};

pub mod handlers;
pub mod router;

use contacts_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: RequestError) -> Error {
        Error::Messaging(format!("telegram error: {e}"))
    }

    fn markup(keyboard: InlineKeyboard) -> InlineKeyboardMarkup {
        let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
            .buttons
            .into_iter()
            .map(|b| vec![InlineKeyboardButton::callback(b.label, b.callback_data)])
            .collect();
        InlineKeyboardMarkup::new(rows)
    }

    /// Pressing the same button twice re-renders identical content; Telegram
    /// rejects that edit, but the message already shows what we wanted.
    fn edit_result<T>(res: std::result::Result<T, RequestError>) -> Result<()> {
        match res {
            Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
            Err(e) => Err(Self::map_err(e)),
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(Self::markup(keyboard))
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn edit_html(&self, msg: MessageRef, html: &str) -> Result<()> {
        let res = self
            .bot
            .edit_message_text(
                Self::tg_chat(msg.chat_id),
                Self::tg_msg_id(msg.message_id),
                html.to_string(),
            )
            .parse_mode(ParseMode::Html)
            .await;
        Self::edit_result(res)
    }

    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()> {
        let res = self
            .bot
            .edit_message_text(
                Self::tg_chat(msg.chat_id),
                Self::tg_msg_id(msg.message_id),
                html.to_string(),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(Self::markup(keyboard))
            .await;
        Self::edit_result(res)
    }

    async fn answer_callback_query(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(callback_id.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use contacts_core::messaging::types::InlineButton;

    use super::*;

    #[test]
    fn markup_puts_one_button_per_row() {
        let kb = InlineKeyboard::new(vec![
            InlineButton::new("Еда", "category_1"),
            InlineButton::new("Электрика", "category_2"),
        ]);
        let markup = TelegramMessenger::markup(kb);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert!(markup.inline_keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(markup.inline_keyboard[0][0].text, "Еда");
    }

    #[test]
    fn unmodified_edit_is_not_an_error() {
        let res: std::result::Result<(), RequestError> =
            Err(RequestError::Api(ApiError::MessageNotModified));
        assert!(TelegramMessenger::edit_result(res).is_ok());

        let res: std::result::Result<(), RequestError> =
            Err(RequestError::Api(ApiError::MessageToEditNotFound));
        assert!(matches!(
            TelegramMessenger::edit_result(res),
            Err(Error::Messaging(_))
        ));
    }
}
