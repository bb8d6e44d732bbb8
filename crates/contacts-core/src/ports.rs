use async_trait::async_trait;

use crate::{
    domain::{Category, Contact},
    Result,
};

/// Read access to categories.
///
/// Lookups take `i64` so any id a button can carry is a valid query that
/// simply finds nothing when out of range.
///
/// Implemented over Postgres in [`crate::repos`]; the router depends only on
/// this trait.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, sorted by name ascending.
    async fn list_all(&self) -> Result<Vec<Category>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>>;
}

/// Read access to contacts. Soft-deleted rows are never returned.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Contacts of one category, sorted by name ascending.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Contact>>;

    async fn get_by_id(&self, contact_id: i64) -> Result<Option<Contact>>;
}
