// Error types for event storage

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in an event store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No event exists with the given id
    #[error("event not found")]
    NotFound,

    /// The backend rejected or failed the statement
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
