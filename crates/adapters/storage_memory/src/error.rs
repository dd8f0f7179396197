//! Storage-specific error type.

use petclinic_domain::error::PetClinicError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the table lock.
    #[error("{0} table lock poisoned")]
    Poisoned(&'static str),

    /// The id sequence ran past `i32::MAX`.
    #[error("{0} id sequence exhausted")]
    SequenceExhausted(&'static str),
}

impl From<StorageError> for PetClinicError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
