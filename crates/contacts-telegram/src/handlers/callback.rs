use contacts_core::{
    callback_data::CallbackAction,
    domain::MessageRef,
    messaging::types::CallbackQuery,
    screens, Result,
};

use crate::router::AppState;

pub(crate) async fn handle_callback(state: &AppState, q: CallbackQuery) {
    // Always answer first; Telegram keeps the button spinning until we do.
    if let Err(e) = state
        .messenger
        .answer_callback_query(&q.callback_id)
        .await
    {
        tracing::warn!(error = %e, "failed to answer callback query");
    }

    let Some(msg) = q.message else {
        tracing::debug!(payload = %q.data, "callback without a message; nothing to edit");
        return;
    };

    match CallbackAction::parse(&q.data) {
        Ok(CallbackAction::ShowCategory(category_id)) => {
            show_contacts(state, msg, category_id).await;
        }
        Ok(CallbackAction::BackToMenu) => {
            // The back button is rendered but no transition is wired to it yet.
            tracing::debug!("back_to_menu pressed; no handler registered");
        }
        Ok(CallbackAction::Unknown(payload)) => {
            tracing::debug!(payload = %payload, "ignoring unknown callback payload");
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid callback data");
            if let Err(e) = state.messenger.edit_html(msg, screens::INVALID_FORMAT).await {
                tracing::warn!(error = %e, "failed to report invalid callback data");
            }
        }
    }
}

async fn show_contacts(state: &AppState, msg: MessageRef, category_id: i64) {
    if let Err(e) = render_contacts(state, msg, category_id).await {
        tracing::error!(error = %e, category_id, "error showing contacts");
        if let Err(e) = state.messenger.edit_html(msg, screens::CONTACTS_FAILED).await {
            tracing::warn!(error = %e, "failed to report contacts failure");
        }
    }
}

async fn render_contacts(state: &AppState, msg: MessageRef, category_id: i64) -> Result<()> {
    let contacts = state.contacts.list_by_category(category_id).await?;
    if contacts.is_empty() {
        return state.messenger.edit_html(msg, screens::EMPTY_CATEGORY).await;
    }

    let category = state.categories.get_by_id(category_id).await?;
    let name = category.as_ref().map(|c| c.name.as_str());

    match screens::category_detail(name, &contacts) {
        Some(screen) => match screen.keyboard {
            Some(keyboard) => {
                state
                    .messenger
                    .edit_inline_keyboard(msg, &screen.text, keyboard)
                    .await
            }
            None => state.messenger.edit_html(msg, &screen.text).await,
        },
        None => state.messenger.edit_html(msg, screens::EMPTY_CATEGORY).await,
    }
}
