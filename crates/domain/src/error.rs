//! Common error types used across the workspace.
//!
//! Each failure family has its own typed error, and all of them convert into
//! [`PetClinicError`] via `#[from]` so services can use `?` throughout.

use crate::id::{CustomerId, PetId, VetId, VisitId};

/// Top-level error returned by every service and port.
#[derive(Debug, thiserror::Error)]
pub enum PetClinicError {
    /// Malformed input, rejected before any I/O.
    #[error("invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A visit-specific business rule was violated.
    #[error(transparent)]
    InvalidVisit(#[from] InvalidVisitError),

    /// An adapter failed to read or write the backing store.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that breaks a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// The telephone is not made of 10 to 12 digits.
    #[error("Telephone must be 10-12 digits")]
    InvalidTelephone,

    /// An identifier is zero or negative.
    #[error("{0} ID must be positive")]
    NonPositiveId(&'static str),

    /// A record passed for creation already carries an identifier.
    #[error("New {0} should not have an ID")]
    IdAlreadyAssigned(&'static str),

    /// A pet's birth date lies after today.
    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,

    /// A visit description exceeds the allowed length.
    #[error("Description must not exceed {max} characters (got {actual})")]
    DescriptionTooLong { max: usize, actual: usize },
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Customer not found: {0}")]
    Customer(CustomerId),

    #[error("Pet not found: {0}")]
    Pet(PetId),

    #[error("Vet not found: {0}")]
    Vet(VetId),

    #[error("Visit not found: {0}")]
    Visit(VisitId),
}

/// A visit lifecycle transition that is not allowed from the current status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalStateError {
    #[error("Only scheduled visits can be completed")]
    NotScheduled,

    #[error("Completed visits cannot be cancelled")]
    AlreadyCompleted,
}

/// Visit business-rule violations surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVisitError {
    /// The referenced pet does not exist in the customers module.
    #[error("Pet not found: {0}")]
    PetNotFound(PetId),

    /// The referenced vet does not exist in the vets module.
    #[error("Vet not found: {0}")]
    VetNotFound(VetId),

    /// The visit state machine refused a transition.
    #[error("{source}")]
    IllegalState {
        #[from]
        source: IllegalStateError,
    },
}
