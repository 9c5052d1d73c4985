//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (not found, constraint
//! violation, pool exhaustion) instead of downcasting opaque errors.

use laureates_core::CoreError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Foreign key, CHECK or NOT NULL constraint violation.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL or connection failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// No pooled connection could be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a constraint violation caused by the written data.
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }
}

/// Classifies SQLite failures instead of wrapping them all as `Database`.
///
/// - `QueryReturnedNoRows` → `NotFound`
/// - `SQLITE_CONSTRAINT` (foreign key, CHECK, NOT NULL) → `Constraint`
/// - anything else → `Database`
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => Self::not_found("row", "unknown"),
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.clone().unwrap_or_else(|| failure.to_string()))
            },
            other => Self::Database(other),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

impl From<CoreError> for StorageError {
    fn from(err: CoreError) -> Self {
        Self::DataCorruption {
            context: "stored row violates domain model".to_owned(),
            source: Box::new(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
