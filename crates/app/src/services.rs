//! Business services — one per module, the unit of business logic.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//!
//! Every mutating operation follows the same order: reject non-positive ids,
//! load the stored record when there is one, validate the payload, persist,
//! then publish. An event is only published once the save it describes has
//! succeeded.

pub mod customer_service;
pub mod vet_service;
pub mod visit_service;

pub use customer_service::CustomerBusinessService;
pub use vet_service::VetBusinessService;
pub use visit_service::VisitBusinessService;

use petclinic_domain::error::{PetClinicError, ValidationError};
use petclinic_domain::event::DomainEvent;

use crate::ports::EventPublisher;

/// Reject ids that cannot refer to a persisted record.
fn require_valid_id(valid: bool, entity: &'static str) -> Result<(), PetClinicError> {
    if valid {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveId(entity).into())
    }
}

/// Reject records that already carry an id when being created.
fn require_new<I>(id: Option<I>, entity: &'static str) -> Result<(), PetClinicError> {
    match id {
        Some(_) => Err(ValidationError::IdAlreadyAssigned(entity).into()),
        None => Ok(()),
    }
}

/// Id the repository assigned on save.
fn assigned_id<I>(id: Option<I>, entity: &'static str) -> Result<I, PetClinicError> {
    id.ok_or_else(|| {
        PetClinicError::Storage(format!("repository returned a {entity} without id").into())
    })
}

/// Publish `event`, logging instead of failing when delivery is refused.
///
/// The state change behind the event is already persisted at this point.
async fn publish<P: EventPublisher>(publisher: &P, event: DomainEvent) {
    let name = event.name();
    match publisher.publish(event).await {
        Ok(()) => tracing::debug!(event = name, "domain event published"),
        Err(err) => tracing::warn!(event = name, error = %err, "failed to publish domain event"),
    }
}
