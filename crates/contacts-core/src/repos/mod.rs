//! Postgres-backed implementations of the store ports.

mod category;
mod contact;

pub use category::CategoryRepository;
pub use contact::ContactRepository;

use sqlx::{postgres::PgRow, FromRow};

use crate::Result;

/// Decode rows into typed records at the repository boundary.
fn decode_rows<T>(rows: &[PgRow]) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    rows.iter()
        .map(|row| T::from_row(row).map_err(crate::Error::from))
        .collect()
}
