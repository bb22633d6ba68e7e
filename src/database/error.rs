//! Storage layer errors

use thiserror::Error;

use super::Table;

/// Errors surfaced by every storage operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or its schema created
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    /// A single statement failed inside the engine
    #[error("storage error: {0}")]
    Engine(#[from] sqlx::Error),
    #[error("no record {id} in {table}")]
    NotFound { table: Table, id: i64 },
    /// A unique index rejected the write
    #[error("duplicate record in {table}")]
    Duplicate { table: Table },
    #[error("invalid lookup: {0}")]
    InvalidIndex(String),
    #[error("invalid record: {0}")]
    Invalid(String),
}

impl StoreError {
    /// Classify an engine error raised by a write against `table`
    pub(crate) fn from_write(table: Table, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate { table }
            }
            _ => StoreError::Engine(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
