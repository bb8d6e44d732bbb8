use async_trait::async_trait;

use crate::{
    db::{Database, SqlParam},
    domain::Contact,
    ports::ContactStore,
    Result,
};

use super::decode_rows;

pub struct ContactRepository {
    db: Database,
}

impl ContactRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Contact>> {
        let rows = self
            .db
            .select(
                r#"
                SELECT id, category_id, number, name, is_deleted
                FROM contacts
                WHERE category_id = $1::int8 AND is_deleted = false
                ORDER BY name COLLATE "C"
                "#,
                &[SqlParam::BigInt(category_id)],
            )
            .await?;
        decode_rows(&rows)
    }

    async fn get_by_id(&self, contact_id: i64) -> Result<Option<Contact>> {
        let rows = self
            .db
            .select(
                r#"
                SELECT id, category_id, number, name, is_deleted
                FROM contacts
                WHERE id = $1::int8 AND is_deleted = false
                "#,
                &[SqlParam::BigInt(contact_id)],
            )
            .await?;
        Ok(decode_rows(&rows)?.into_iter().next())
    }
}
