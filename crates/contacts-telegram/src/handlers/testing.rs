//! In-memory fakes for driving handlers without Telegram or Postgres.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use contacts_core::{
    domain::{Category, ChatId, Contact, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    ports::{CategoryStore, ContactStore},
    Result,
};

use crate::router::AppState;

pub(crate) const BOT_USERNAME: &str = "contacts_bot";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Sent {
    Html {
        chat_id: ChatId,
        text: String,
    },
    Keyboard {
        chat_id: ChatId,
        text: String,
        keyboard: InlineKeyboard,
    },
    EditHtml {
        msg: MessageRef,
        text: String,
    },
    EditKeyboard {
        msg: MessageRef,
        text: String,
        keyboard: InlineKeyboard,
    },
    Answer {
        callback_id: String,
    },
}

#[derive(Default)]
pub(crate) struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub(crate) fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, s: Sent) {
        self.sent.lock().unwrap().push(s);
    }

    fn next_ref(&self, chat_id: ChatId) -> MessageRef {
        let n = self.sent.lock().unwrap().len() as i32;
        MessageRef {
            chat_id,
            message_id: MessageId(n + 1),
        }
    }
}

#[async_trait]
impl MessagingPort for RecordingMessenger {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef> {
        let r = self.next_ref(chat_id);
        self.record(Sent::Html {
            chat_id,
            text: html.to_string(),
        });
        Ok(r)
    }

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef> {
        let r = self.next_ref(chat_id);
        self.record(Sent::Keyboard {
            chat_id,
            text: html.to_string(),
            keyboard,
        });
        Ok(r)
    }

    async fn edit_html(&self, msg: MessageRef, html: &str) -> Result<()> {
        self.record(Sent::EditHtml {
            msg,
            text: html.to_string(),
        });
        Ok(())
    }

    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()> {
        self.record(Sent::EditKeyboard {
            msg,
            text: html.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: &str) -> Result<()> {
        self.record(Sent::Answer {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}

pub(crate) struct ContactSeed;

impl ContactSeed {
    pub(crate) fn live(id: i32, category_id: i32, name: &str, number: &str) -> Contact {
        Contact {
            id,
            category_id: Some(category_id),
            number: number.to_string(),
            name: name.to_string(),
            is_deleted: false,
        }
    }

    pub(crate) fn deleted(id: i32, category_id: i32, name: &str, number: &str) -> Contact {
        Contact {
            is_deleted: true,
            ..Self::live(id, category_id, name, number)
        }
    }
}

/// Both stores over plain vectors, ordered by code point like `COLLATE "C"`.
#[derive(Default)]
pub(crate) struct MemoryCatalog {
    categories: Vec<Category>,
    contacts: Vec<Contact>,
    failing: AtomicBool,
    queries: AtomicUsize,
}

impl MemoryCatalog {
    pub(crate) fn fail_queries(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for MemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Category>> {
        self.begin()?;
        let mut out = self.categories.clone();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.begin()?;
        Ok(self.categories.iter().find(|c| i64::from(c.id) == id).cloned())
    }
}

#[async_trait]
impl ContactStore for MemoryCatalog {
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Contact>> {
        self.begin()?;
        let mut out: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.category_id.map(i64::from) == Some(category_id) && !c.is_deleted)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn get_by_id(&self, contact_id: i64) -> Result<Option<Contact>> {
        self.begin()?;
        Ok(self
            .contacts
            .iter()
            .find(|c| i64::from(c.id) == contact_id && !c.is_deleted)
            .cloned())
    }
}

pub(crate) fn fixture(
    categories: &[(i32, &str)],
    contacts: &[Contact],
) -> (AppState, Arc<RecordingMessenger>, Arc<MemoryCatalog>) {
    let messenger = Arc::new(RecordingMessenger::default());
    let catalog = Arc::new(MemoryCatalog {
        categories: categories
            .iter()
            .map(|(id, name)| Category {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
        contacts: contacts.to_vec(),
        ..MemoryCatalog::default()
    });

    let state = AppState::new(
        Some(BOT_USERNAME.to_string()),
        messenger.clone(),
        catalog.clone(),
        catalog.clone(),
    );
    (state, messenger, catalog)
}
