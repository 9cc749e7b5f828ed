//! # Storage Error Types
//!
//! Error types for document and blob store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite error (sqlx::Error) / filesystem error (std::io::Error)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (shopfront-manager) ← what the screen layer surfaces         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Document not found in a collection.
    #[error("{collection} document not found: {id}")]
    NotFound { collection: String, id: String },

    /// A document body failed to (de)serialize.
    ///
    /// Documents are schemaless; a hand-edited or legacy body can fail to
    /// map onto the typed entity.
    #[error("Invalid document in {collection}: {source}")]
    Serialization {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Blob store object not found.
    #[error("Blob not found: {path}")]
    BlobNotFound { path: String },

    /// Blob store I/O failure.
    #[error("Blob store error at {path}: {source}")]
    BlobIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a collection and document id.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates a Serialization error for a collection.
    pub fn serialization(collection: impl Into<String>, source: serde_json::Error) -> Self {
        DbError::Serialization {
            collection: collection.into(),
            source,
        }
    }

    /// Creates a BlobIo error for a blob path.
    pub fn blob_io(path: impl Into<String>, source: std::io::Error) -> Self {
        DbError::BlobIo {
            path: path.into(),
            source,
        }
    }
}

/// Convert sqlx errors to DbError.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                collection: "unknown".to_string(),
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("products", "p-1");
        assert_eq!(err.to_string(), "products document not found: p-1");
    }

    #[test]
    fn test_blob_not_found_message() {
        let err = DbError::BlobNotFound {
            path: "product/missing.png".to_string(),
        };
        assert_eq!(err.to_string(), "Blob not found: product/missing.png");
    }
}
