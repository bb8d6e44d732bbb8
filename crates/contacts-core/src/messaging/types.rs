use crate::domain::{ChatId, MessageRef};

/// An inbound slash command.
#[derive(Clone, Debug)]
pub struct Command {
    pub chat_id: ChatId,
    /// Lowercased command name without the leading `/`.
    pub name: String,
    /// Bot username after `@` (`/menu@some_bot`), if the command named one.
    pub target: Option<String>,
}

impl Command {
    /// Whether a bot called `username` should handle this command.
    ///
    /// Unaddressed commands are for everyone. Addressed ones only match the
    /// named bot, case-insensitively; with no known username they match nobody.
    pub fn is_addressed_to(&self, username: Option<&str>) -> bool {
        match (&self.target, username) {
            (None, _) => true,
            (Some(target), Some(own)) => target.eq_ignore_ascii_case(own),
            (Some(_), None) => false,
        }
    }
}

/// An inbound button press.
#[derive(Clone, Debug)]
pub struct CallbackQuery {
    pub callback_id: String,
    pub data: String,
    /// Message the pressed keyboard is attached to, if Telegram still has it.
    pub message: Option<MessageRef>,
}

/// Inline keyboard (buttons) attached to a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

impl InlineKeyboard {
    /// One button per row, in the given order.
    pub fn new(buttons: Vec<InlineButton>) -> Self {
        Self { buttons }
    }

    pub fn single(button: InlineButton) -> Self {
        Self {
            buttons: vec![button],
        }
    }
}
