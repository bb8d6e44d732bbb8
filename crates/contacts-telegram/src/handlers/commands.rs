use contacts_core::{
    domain::{ChatId, MessageRef},
    messaging::types::Command,
    screens::{self, Screen},
    Result,
};

use crate::router::AppState;

/// Split `/cmd@botname arg1 ...` into the lowercased name and the `@` target.
/// Arguments are dropped; no command takes any.
pub(crate) fn parse_command(text: &str) -> (String, Option<String>) {
    let first = text.split_whitespace().next().unwrap_or("");
    let (name, target) = match first.trim_start_matches('/').split_once('@') {
        Some((name, target)) => (name, Some(target.to_string())),
        None => (first.trim_start_matches('/'), None),
    };
    (name.to_lowercase(), target)
}

pub(crate) async fn handle_command(state: &AppState, cmd: Command) {
    if !cmd.is_addressed_to(state.bot_username.as_deref()) {
        tracing::debug!(
            command = %cmd.name,
            target = cmd.target.as_deref().unwrap_or(""),
            "ignoring command addressed to another bot"
        );
        return;
    }

    match cmd.name.as_str() {
        "start" => {
            if let Err(e) = send_screen(state, cmd.chat_id, screens::welcome()).await {
                tracing::warn!(error = %e, "failed to send welcome");
            }
        }
        "menu" => show_menu(state, cmd.chat_id).await,
        other => tracing::debug!(command = other, "ignoring unregistered command"),
    }
}

/// Category picker for the current catalog; `None` when there are no categories.
///
/// Shared by every path that renders the menu.
pub(crate) async fn load_menu(state: &AppState) -> Result<Option<Screen>> {
    let categories = state.categories.list_all().await?;
    Ok(screens::menu(&categories))
}

async fn show_menu(state: &AppState, chat_id: ChatId) {
    let sent = match load_menu(state).await {
        Ok(Some(screen)) => send_screen(state, chat_id, screen).await,
        Ok(None) => state.messenger.send_html(chat_id, screens::NO_CATEGORIES).await,
        Err(e) => {
            tracing::error!(error = %e, "error in menu command");
            state
                .messenger
                .send_html(chat_id, screens::CATEGORIES_FAILED)
                .await
        }
    };

    if let Err(e) = sent {
        tracing::warn!(error = %e, "failed to send menu reply");
    }
}

async fn send_screen(state: &AppState, chat_id: ChatId, screen: Screen) -> Result<MessageRef> {
    match screen.keyboard {
        Some(keyboard) => {
            state
                .messenger
                .send_inline_keyboard(chat_id, &screen.text, keyboard)
                .await
        }
        None => state.messenger.send_html(chat_id, &screen.text).await,
    }
}
