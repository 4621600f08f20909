//! # Store Error Types
//!
//! Error types for document store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/server) ← Status code + message for clients         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Document store operation errors.
///
/// These wrap sqlx and serde_json errors and add context for debugging and
/// for the HTTP layer's status-code mapping.
///
/// A missing document is not an error at this layer: `Collection::get`
/// returns `Ok(None)` and callers decide what absence means.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A document body could not be serialized or deserialized.
    ///
    /// ## When This Occurs
    /// - A stored body no longer matches the current record shape
    #[error("Document serialization failed: {0}")]
    Serialization(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// sqlx::Error::Database       → StoreError::QueryFailed
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::Database(db_err) => StoreError::QueryFailed(db_err.message().to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_categories() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::PoolExhausted));

        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::ConnectionFailed(_)));
    }
}
