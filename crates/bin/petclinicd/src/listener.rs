//! Event log — a background consumer that writes every domain event to the log.

use petclinic_domain::event::DomainEvent;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Spawn [`run`] on the current runtime.
pub fn spawn(events: Receiver<DomainEvent>) -> JoinHandle<usize> {
    tokio::spawn(run(events))
}

/// Log events until the bus closes. Returns how many events were logged.
pub async fn run(mut events: Receiver<DomainEvent>) -> usize {
    let mut logged = 0;
    loop {
        match events.recv().await {
            Ok(event) => {
                tracing::info!(event = event.name(), "{event}");
                logged += 1;
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind, events dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!(logged, "event bus closed");
    logged
}
