//! # petclinic-app
//!
//! Application layer — business services and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CustomerRepository`, `VetRepository`, `VisitRepository` — persistence
//!   - `PetValidator`, `VetValidator` — existence checks across modules
//!   - `EventPublisher` — hand domain events to the notification channel
//! - Define **driving/inbound ports** as business service structs:
//!   - `CustomerBusinessService` — customers and their pets
//!   - `VetBusinessService` — vets
//!   - `VisitBusinessService` — visits and their lifecycle
//! - Provide the validator adapters that answer existence questions through
//!   another module's public service
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `petclinic-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
pub mod validators;

#[cfg(test)]
mod testing;
