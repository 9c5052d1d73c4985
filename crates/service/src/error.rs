//! Typed error enum for the service layer.
//!
//! Unifies storage and dataset failures into a single error type, enabling
//! callers to match on specific failure modes instead of downcasting.

use laureates_core::CoreError;
use laureates_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and dataset failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, constraint, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Dataset could not be read or parsed.
    #[error("dataset: {0}")]
    Dataset(#[from] CoreError),

    /// Blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a violated foreign key or CHECK constraint.
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Constraint(_)))
    }
}
