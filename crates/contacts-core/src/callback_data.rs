//! Inline-button payload grammar: `category_<id>` or `back_to_menu`.

use crate::{errors::Error, Result};

pub const CATEGORY_PREFIX: &str = "category_";
pub const BACK_TO_MENU: &str = "back_to_menu";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Category id as pressed; it may not exist in the catalog.
    ShowCategory(i64),
    BackToMenu,
    /// A payload this bot never issued.
    Unknown(String),
}

impl CallbackAction {
    /// The id is the token between the first and second `_`, so
    /// `category_1_2` selects category 1. Surrounding whitespace and a sign
    /// are accepted; anything else non-numeric is invalid.
    pub fn parse(data: &str) -> Result<Self> {
        if data.starts_with(CATEGORY_PREFIX) {
            let token = data.split('_').nth(1).unwrap_or("").trim();
            return token
                .parse::<i64>()
                .map(Self::ShowCategory)
                .map_err(|_| Error::InvalidCallback(data.to_string()));
        }
        if data == BACK_TO_MENU {
            return Ok(Self::BackToMenu);
        }
        Ok(Self::Unknown(data.to_string()))
    }

    /// Payload for a category button.
    pub fn category(id: i32) -> String {
        format!("{CATEGORY_PREFIX}{id}")
    }
}
