use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use contacts_core::{
    config::Config,
    db::Database,
    messaging::port::MessagingPort,
    ports::{CategoryStore, ContactStore},
    repos::{CategoryRepository, ContactRepository},
};

use crate::handlers;
use crate::TelegramMessenger;

/// Everything a handler needs. No conversation state is kept between updates;
/// button payloads carry the selected ids.
#[derive(Clone)]
pub struct AppState {
    /// Our own `@username`, used to skip commands addressed to other bots.
    pub bot_username: Option<String>,
    pub messenger: Arc<dyn MessagingPort>,
    pub categories: Arc<dyn CategoryStore>,
    pub contacts: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(
        bot_username: Option<String>,
        messenger: Arc<dyn MessagingPort>,
        categories: Arc<dyn CategoryStore>,
        contacts: Arc<dyn ContactStore>,
    ) -> Self {
        Self {
            bot_username,
            messenger,
            categories,
            contacts,
        }
    }
}

/// Long-poll Telegram until Ctrl-C.
pub async fn run_polling(cfg: Arc<Config>, db: Database) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    let bot_username = match bot.get_me().await {
        Ok(me) => {
            tracing::info!(username = %me.username(), "bot is running");
            Some(me.username().to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "get_me failed; addressed commands will be ignored");
            None
        }
    };

    let state = Arc::new(AppState::new(
        bot_username,
        Arc::new(TelegramMessenger::new(bot.clone())),
        Arc::new(CategoryRepository::new(db.clone())),
        Arc::new(ContactRepository::new(db)),
    ));

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("dispatcher stopped");
    Ok(())
}
