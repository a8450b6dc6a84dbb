//! Repository Module
//!
//! Plain async functions over a `&SqlitePool`. Handlers get the pool from
//! `ServerState` and pass it in explicitly.

pub mod cafe;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A UNIQUE constraint failed; holds the offending column
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            let column = unique_column(db_err.message()).unwrap_or("record");
            return RepoError::Duplicate(column.to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Column name from a SQLite message like `UNIQUE constraint failed: cafe.name`
fn unique_column(message: &str) -> Option<&str> {
    let (_, columns) = message.rsplit_once(": ")?;
    let first = columns.split(',').next()?.trim();
    first.rsplit('.').next().filter(|c| !c.is_empty())
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
