//! Validator adapters — answer existence questions through another module's
//! public service.
//!
//! The visits module needs to know whether a pet or vet exists. These
//! adapters ask the customers and vets services, so visits never touch the
//! repositories or internals of those modules.

use std::future::Future;
use std::sync::Arc;

use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{PetId, VetId};

use crate::ports::{CustomerRepository, EventPublisher, PetValidator, VetRepository, VetValidator};
use crate::services::{CustomerBusinessService, VetBusinessService};

/// [`PetValidator`] backed by the customers service.
pub struct CustomerServicePetValidator<R, P> {
    customers: Arc<CustomerBusinessService<R, P>>,
}

impl<R, P> CustomerServicePetValidator<R, P> {
    #[must_use]
    pub fn new(customers: Arc<CustomerBusinessService<R, P>>) -> Self {
        Self { customers }
    }
}

impl<R, P> PetValidator for CustomerServicePetValidator<R, P>
where
    R: CustomerRepository + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    fn pet_exists(&self, id: PetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        async move {
            if !id.is_valid() {
                return Ok(false);
            }
            Ok(self.customers.find_pet(id).await?.is_some())
        }
    }
}

/// [`VetValidator`] backed by the vets service.
pub struct VetServiceVetValidator<R, P> {
    vets: Arc<VetBusinessService<R, P>>,
}

impl<R, P> VetServiceVetValidator<R, P> {
    #[must_use]
    pub fn new(vets: Arc<VetBusinessService<R, P>>) -> Self {
        Self { vets }
    }
}

impl<R, P> VetValidator for VetServiceVetValidator<R, P>
where
    R: VetRepository + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    fn vet_exists(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        async move {
            if !id.is_valid() {
                return Ok(false);
            }
            Ok(self.vets.find_by_id(id).await?.is_some())
        }
    }
}
