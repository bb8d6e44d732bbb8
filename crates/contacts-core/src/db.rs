//! Persistence gateway over a Postgres connection pool.
//!
//! Handlers run concurrently, so connections are checked out of a bounded
//! `PgPool` per statement instead of sharing one connection.

use sqlx::{
    postgres::{PgArguments, PgPoolOptions, PgRow},
    query::Query,
    PgPool, Postgres,
};

use crate::{config::Config, errors::Error, Result};

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Int(i32),
    BigInt(i64),
    Text(String),
    Bool(bool),
}

/// Result of [`Database::execute`].
pub enum QueryOutput {
    /// Rows of a `SELECT`, in result order.
    Rows(Vec<PgRow>),
    /// Rows affected by a committed non-`SELECT` statement.
    Affected(u64),
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(cfg: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(cfg.db_max_connections)
            .connect_with(cfg.connect_options())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, host = %cfg.db_host, "database connection error");
                e
            })?;

        tracing::info!(
            host = %cfg.db_host,
            database = %cfg.db_name,
            max_connections = cfg.db_max_connections,
            "connected to database"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, embedding).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute one parameterized statement.
    ///
    /// `SELECT` returns every row. Anything else runs in its own transaction,
    /// committed on success and rolled back on failure.
    pub async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<QueryOutput> {
        if is_select(statement) {
            let rows = bind_all(sqlx::query(statement), params)
                .fetch_all(&self.pool)
                .await
                .map_err(log_execution_error)?;
            return Ok(QueryOutput::Rows(rows));
        }

        let mut tx = self.pool.begin().await.map_err(log_execution_error)?;
        let res = bind_all(sqlx::query(statement), params)
            .execute(&mut *tx)
            .await;
        match res {
            Ok(done) => {
                tx.commit().await.map_err(log_execution_error)?;
                Ok(QueryOutput::Affected(done.rows_affected()))
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(log_execution_error(e))
            }
        }
    }

    /// `execute` for a `SELECT`. Any other statement is refused unexecuted.
    pub async fn select(&self, statement: &str, params: &[SqlParam]) -> Result<Vec<PgRow>> {
        if !is_select(statement) {
            return Err(kind_mismatch("select() needs a SELECT statement"));
        }
        match self.execute(statement, params).await? {
            QueryOutput::Rows(rows) => Ok(rows),
            QueryOutput::Affected(_) => Err(kind_mismatch("SELECT produced no rows set")),
        }
    }

    /// `execute` for a modifying statement. A `SELECT` is refused unexecuted.
    pub async fn modify(&self, statement: &str, params: &[SqlParam]) -> Result<u64> {
        if is_select(statement) {
            return Err(kind_mismatch("modify() cannot run a SELECT statement"));
        }
        match self.execute(statement, params).await? {
            QueryOutput::Affected(n) => Ok(n),
            QueryOutput::Rows(_) => Err(kind_mismatch("statement returned rows")),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database connection closed");
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::BigInt(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Bool(v) => query.bind(*v),
        };
    }
    query
}

fn log_execution_error(e: sqlx::Error) -> Error {
    tracing::error!(error = %e, "query execution error");
    Error::Database(e)
}

fn kind_mismatch(what: &str) -> Error {
    tracing::warn!(what, "statement kind mismatch");
    Error::StatementKind(what.to_string())
}

fn is_select(statement: &str) -> bool {
    statement
        .trim_start()
        .get(..6)
        .map(|head| head.eq_ignore_ascii_case("select"))
        .unwrap_or(false)
}
