//! Domain event fan-out inside one process.
//!
//! Customers, vets and visits publish here; the event log and any other
//! in-process consumer hold a receiver each.

use std::future::Future;

use tokio::sync::broadcast;

use petclinic_domain::error::PetClinicError;
use petclinic_domain::event::DomainEvent;

use crate::ports::EventPublisher;

/// [`EventPublisher`] that hands every [`DomainEvent`] to all current
/// receivers of a [`broadcast`] channel.
///
/// Receivers observe the events of one service in the order they were
/// published. A receiver that falls more than `capacity` events behind
/// loses the oldest ones. An event published while nobody listens is
/// discarded and the publish still succeeds.
pub struct InProcessEventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl InProcessEventBus {
    /// Build a bus buffering up to `capacity` events per receiver.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Attach a new receiver. It only sees events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of attached receivers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(
        &self,
        event: DomainEvent,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(event = name, receivers, "event dispatched"),
            Err(_) => tracing::trace!(event = name, "no receiver, event discarded"),
        }
        async { Ok(()) }
    }
}
