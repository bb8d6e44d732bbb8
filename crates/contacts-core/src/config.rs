use std::{env, fmt};

use sqlx::postgres::PgConnectOptions;

use crate::{errors::Error, Result};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "telegram_bot_db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Typed configuration for the bot.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,

    // Database
    pub db_host: String,
    pub db_port: u16,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_name: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Existing environment wins over `.env`.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN not found in environment variables".to_string())
            })?;

        let db_host = lookup("DB_HOST")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let db_port = parse_or(lookup("DB_PORT"), DEFAULT_DB_PORT);
        let db_user = lookup("DB_USER").and_then(non_empty);
        let db_password = lookup("DB_PASSWORD").and_then(non_empty);
        let db_name = lookup("DB_NAME")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        let db_max_connections =
            parse_or(lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS).max(1);

        Ok(Self {
            bot_token,
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_max_connections,
        })
    }

    /// Postgres connect options assembled from the individual `DB_*` keys.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name);
        if let Some(user) = &self.db_user {
            opts = opts.username(user);
        }
        if let Some(password) = &self.db_password {
            opts = opts.password(password);
        }
        opts
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(v: Option<String>, default: T) -> T {
    v.and_then(|s| s.trim().parse::<T>().ok()).unwrap_or(default)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
