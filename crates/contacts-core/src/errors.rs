/// Core error type for the contacts bot.
///
/// Adapter crates map their specific errors into this type so the router can
/// tell a user-facing failure apart from a startup failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("messaging error: {0}")]
    Messaging(String),

    #[error("statement kind mismatch: {0}")]
    StatementKind(String),

    #[error("invalid callback data: {0}")]
    InvalidCallback(String),
}

pub type Result<T> = std::result::Result<T, Error>;
