//! Event bus port — fire domain events at the notification channel.

use std::future::Future;

use petclinic_domain::error::PetClinicError;
use petclinic_domain::event::DomainEvent;

/// Publishes domain events to interested subscribers.
///
/// Callers only publish after the corresponding state change has been
/// persisted. A failed publish is reported but never undoes that change.
pub trait EventPublisher {
    /// Hand an event to the delivery mechanism.
    fn publish(&self, event: DomainEvent)
    -> impl Future<Output = Result<(), PetClinicError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: DomainEvent,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        (**self).publish(event)
    }
}
