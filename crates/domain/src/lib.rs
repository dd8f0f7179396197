//! # petclinic-domain
//!
//! Pure domain model for the petclinic back office.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy, timestamps
//! - Define **Customers** (pet owners) and the **Pets** they own
//! - Define **Vets** and their **Specialties**
//! - Define **Visits** and the visit lifecycle state machine
//! - Define **Domain events** (immutable records of committed changes)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod customer;
pub mod event;
pub mod pet;
pub mod vet;
pub mod visit;
