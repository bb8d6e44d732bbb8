use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Cross-messenger port.
///
/// All text is Telegram-style HTML; callers escape any user or database text.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    /// Replace the text of an existing message, dropping any keyboard.
    async fn edit_html(&self, msg: MessageRef, html: &str) -> Result<()>;

    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    /// Stop the button's loading spinner.
    async fn answer_callback_query(&self, callback_id: &str) -> Result<()>;
}
