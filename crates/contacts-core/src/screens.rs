//! Text + keyboard for each screen of the catalog conversation.
//!
//! Renderers are pure; database text is HTML-escaped here.

use crate::{
    callback_data::{CallbackAction, BACK_TO_MENU},
    domain::{Category, Contact},
    formatting::escape_html,
    messaging::types::{InlineButton, InlineKeyboard},
};

pub const WELCOME: &str = "👋 Добро пожаловать в бот контактов!\n\n\
Используйте команду /menu для просмотра категорий контактов.";
pub const MENU_PROMPT: &str = "📁 Выберите категорию:";
pub const NO_CATEGORIES: &str = "Категории не найдены";
pub const EMPTY_CATEGORY: &str = "📭 В этой категории нет контактов";
pub const INVALID_FORMAT: &str = "❌ Ошибка: неверный формат данных";
pub const CATEGORIES_FAILED: &str = "❌ Ошибка при получении категорий";
pub const CONTACTS_FAILED: &str = "❌ Ошибка при получении контактов";
pub const UNKNOWN_CATEGORY: &str = "Неизвестная категория";
pub const BACK_LABEL: &str = "🔙 Назад к категориям";

const SEPARATOR_WIDTH: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub keyboard: Option<InlineKeyboard>,
}

impl Screen {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

pub fn welcome() -> Screen {
    Screen::plain(WELCOME)
}

/// Category picker, one button per category in the given order.
///
/// `None` when there is nothing to pick.
pub fn menu(categories: &[Category]) -> Option<Screen> {
    if categories.is_empty() {
        return None;
    }
    let buttons = categories
        .iter()
        .map(|c| InlineButton::new(c.name.clone(), CallbackAction::category(c.id)))
        .collect();
    Some(Screen {
        text: MENU_PROMPT.to_string(),
        keyboard: Some(InlineKeyboard::new(buttons)),
    })
}

/// Contact list of one category with a single back button.
///
/// `None` when the category has no contacts.
pub fn category_detail(category_name: Option<&str>, contacts: &[Contact]) -> Option<Screen> {
    if contacts.is_empty() {
        return None;
    }

    let name = category_name.unwrap_or(UNKNOWN_CATEGORY);
    let separator = "─".repeat(SEPARATOR_WIDTH);
    let mut text = format!("📋 Контакты категории: <b>{}</b>\n\n", escape_html(name));
    for contact in contacts {
        text.push_str(&format!(
            "👤 {}\n📞 {}\n{separator}\n",
            escape_html(&contact.name),
            escape_html(&contact.number)
        ));
    }

    Some(Screen {
        text,
        keyboard: Some(InlineKeyboard::single(InlineButton::new(
            BACK_LABEL,
            BACK_TO_MENU,
        ))),
    })
}
