use crate::{
    db::{Database, SqlParam},
    Result,
};

/// Categories present after every startup.
pub const SEED_CATEGORIES: [&str; 11] = [
    "Строительство",
    "Ремонт техники",
    "Водоснабжение",
    "Откачка/Септики",
    "Электрика",
    "Уничтожение насекомых",
    "Строительные материалы",
    "Работы по участку",
    "Услуги",
    "Еда",
    "Ручная работа",
];

const CREATE_CATEGORIES: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL UNIQUE
    )
"#;

const CREATE_CONTACTS: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id SERIAL PRIMARY KEY,
        category_id INTEGER REFERENCES categories(id),
        number VARCHAR(50) NOT NULL,
        name VARCHAR(255) NOT NULL,
        is_deleted BOOLEAN DEFAULT FALSE
    )
"#;

/// Create both tables and seed the fixed categories. Safe to run on every start.
pub async fn initialize(db: &Database) -> Result<()> {
    let result = async {
        db.modify(CREATE_CATEGORIES, &[]).await?;
        db.modify(CREATE_CONTACTS, &[]).await?;
        let inserted = seed_categories(db, &SEED_CATEGORIES).await?;
        Ok::<_, crate::Error>(inserted)
    }
    .await;

    match result {
        Ok(inserted) => {
            tracing::info!(seeded = inserted, "database initialized");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "database initialization error");
            Err(e)
        }
    }
}

/// Insert category names, skipping any that already exist. Returns the number inserted.
pub async fn seed_categories(db: &Database, names: &[&str]) -> Result<u64> {
    if names.is_empty() {
        return Ok(0);
    }
    let params: Vec<SqlParam> = names
        .iter()
        .map(|n| SqlParam::Text((*n).to_string()))
        .collect();
    db.modify(&seed_statement(names.len()), &params).await
}

fn seed_statement(count: usize) -> String {
    let values = (1..=count)
        .map(|i| format!("(${i})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO categories (name) VALUES {values} ON CONFLICT (name) DO NOTHING")
}
