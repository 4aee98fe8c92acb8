//! Store error types

use thiserror::Error;

/// Failure reaching, reading or writing the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Pool exhausted, connection refused, TLS or socket failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Not-null, unique, foreign-key or check constraint violated
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Query failed or a row could not be decoded
    #[error("Query error: {0}")]
    Query(String),

    /// Table creation failed
    #[error("Schema error: {0}")]
    Schema(String),
}

impl StoreError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if !matches!(db.kind(), sqlx::error::ErrorKind::Other) => {
                StoreError::Constraint(db.message().to_string())
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => StoreError::Connection(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
