//! Validator ports — existence checks against records owned by other modules.
//!
//! The visits module uses these to check the pet and vet a visit refers to
//! without knowing how customers or vets are stored.

use std::future::Future;

use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{PetId, VetId};

/// Answers whether a pet exists.
pub trait PetValidator {
    fn pet_exists(&self, id: PetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send;
}

/// Answers whether a vet exists.
pub trait VetValidator {
    fn vet_exists(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send;
}

impl<T: PetValidator + Send + Sync> PetValidator for std::sync::Arc<T> {
    fn pet_exists(&self, id: PetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        (**self).pet_exists(id)
    }
}

impl<T: VetValidator + Send + Sync> VetValidator for std::sync::Arc<T> {
    fn vet_exists(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        (**self).vet_exists(id)
    }
}
