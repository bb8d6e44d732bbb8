use async_trait::async_trait;

use crate::{
    db::{Database, SqlParam},
    domain::Category,
    ports::CategoryStore,
    Result,
};

use super::decode_rows;

pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let rows = self
            .db
            .select(
                r#"SELECT id, name FROM categories ORDER BY name COLLATE "C""#,
                &[],
            )
            .await?;
        decode_rows(&rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let rows = self
            .db
            .select(
                "SELECT id, name FROM categories WHERE id = $1::int8",
                &[SqlParam::BigInt(id)],
            )
            .await?;
        Ok(decode_rows(&rows)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    async fn repo() -> CategoryRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = sqlx::PgPool::connect(&url).await.expect("pool creation failed");
        let db = Database::from_pool(pool);
        schema::initialize(&db).await.expect("schema init failed");
        CategoryRepository::new(db)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_categories_sorted_without_duplicates() {
        let repo = repo().await;
        let all = repo.list_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        sorted.dedup();
        assert_eq!(sorted.len(), names.len());

        let food = names.iter().position(|n| *n == "Еда").unwrap();
        let electric = names.iter().position(|n| *n == "Электрика").unwrap();
        assert!(food < electric);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_by_id_returns_one_or_none() {
        let repo = repo().await;
        let first = repo.list_all().await.unwrap().remove(0);

        assert_eq!(repo.get_by_id(i64::from(first.id)).await.unwrap(), Some(first));
        assert_eq!(repo.get_by_id(-1).await.unwrap(), None);
        assert_eq!(repo.get_by_id(3_000_000_000).await.unwrap(), None);
    }
}
