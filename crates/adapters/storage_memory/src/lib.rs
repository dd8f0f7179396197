//! # petclinic-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `petclinic-app::ports::storage`
//! - Assign integer ids from per-table sequences starting at 1
//! - Keep customers and their pets together, so pets can be found by id
//!
//! ## Dependency rule
//! Depends on `petclinic-app` (for port traits) and `petclinic-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod table;

pub mod customer_repo;
pub mod vet_repo;
pub mod visit_repo;

pub use customer_repo::InMemoryCustomerRepository;
pub use error::StorageError;
pub use vet_repo::InMemoryVetRepository;
pub use visit_repo::InMemoryVisitRepository;
