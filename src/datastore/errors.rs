//! # Datastore Errors

use thiserror::Error;

/// Result type for datastore operations
pub type DatastoreResult<T> = Result<T, DatastoreError>;

/// Datastore errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatastoreError {
    /// No record with this id in the collection
    #[error("No record {id} in collection '{collection}'")]
    NotFound { collection: String, id: u64 },

    /// Record is not a flat JSON object, or lacks a usable id
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Two seeded records share an id
    #[error("Duplicate id {id} in collection '{collection}'")]
    DuplicateId { collection: String, id: u64 },

    /// Collection has handed out every assignable id
    #[error("No ids left to assign in collection '{collection}'")]
    IdsExhausted { collection: String },

    /// A writer panicked while holding the collection lock
    #[error("Datastore lock poisoned")]
    LockPoisoned,

    /// Fixture file could not be read or parsed
    #[error("Seed error: {0}")]
    Seed(String),
}

impl DatastoreError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            DatastoreError::NotFound { .. } => "SHOWDB_RECORD_NOT_FOUND",
            DatastoreError::InvalidRecord(_) => "SHOWDB_INVALID_RECORD",
            DatastoreError::DuplicateId { .. } => "SHOWDB_DUPLICATE_ID",
            DatastoreError::IdsExhausted { .. } => "SHOWDB_IDS_EXHAUSTED",
            DatastoreError::LockPoisoned => "SHOWDB_LOCK_POISONED",
            DatastoreError::Seed(_) => "SHOWDB_SEED_FAILED",
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for DatastoreError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        DatastoreError::LockPoisoned
    }
}
