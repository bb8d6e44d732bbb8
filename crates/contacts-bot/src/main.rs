use std::sync::Arc;

use contacts_core::{config::Config, db::Database, schema};

#[tokio::main]
async fn main() -> Result<(), contacts_core::Error> {
    contacts_core::logging::init("contacts-bot")?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(error = %e, "bot not started");
            return Err(e);
        }
    };

    let db = Database::connect(&cfg).await?;

    let result = run(cfg, &db).await;
    db.close().await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "bot stopped with error");
    }
    result
}

async fn run(cfg: Arc<Config>, db: &Database) -> Result<(), contacts_core::Error> {
    schema::initialize(db).await?;

    contacts_telegram::router::run_polling(cfg, db.clone())
        .await
        .map_err(|e| contacts_core::Error::Messaging(format!("telegram bot failed: {e}")))
}
