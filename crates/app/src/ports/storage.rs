//! Storage ports — repository traits for persistence.
//!
//! `save` is an upsert: a record without id is inserted and returned with the
//! id the store assigned, a record with id replaces the stored one.

use std::future::Future;
use std::sync::Arc;

use petclinic_domain::customer::Customer;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{CustomerId, PetId, VetId, VisitId};
use petclinic_domain::vet::Vet;
use petclinic_domain::visit::Visit;

/// Repository for persisting and querying [`Customer`]s together with their pets.
pub trait CustomerRepository {
    fn find_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Customer>, PetClinicError>> + Send;

    /// Find the customer owning the pet with the given id.
    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send;

    /// Insert or replace a customer. New pets receive ids as well.
    fn save(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, PetClinicError>> + Send;

    fn delete_by_id(&self, id: CustomerId)
    -> impl Future<Output = Result<(), PetClinicError>> + Send;

    fn exists_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send;
}

/// Repository for persisting and querying [`Vet`]s.
pub trait VetRepository {
    fn find_by_id(&self, id: VetId)
    -> impl Future<Output = Result<Option<Vet>, PetClinicError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Vet>, PetClinicError>> + Send;

    fn save(&self, vet: Vet) -> impl Future<Output = Result<Vet, PetClinicError>> + Send;

    fn delete_by_id(&self, id: VetId) -> impl Future<Output = Result<(), PetClinicError>> + Send;

    fn exists_by_id(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send;
}

/// Repository for persisting and querying [`Visit`]s.
pub trait VisitRepository {
    fn find_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, PetClinicError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send;

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send;

    fn find_by_vet_id(
        &self,
        vet_id: VetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send;

    fn save(&self, visit: Visit) -> impl Future<Output = Result<Visit, PetClinicError>> + Send;

    fn delete_by_id(&self, id: VisitId)
    -> impl Future<Output = Result<(), PetClinicError>> + Send;

    fn exists_by_id(&self, id: VisitId)
    -> impl Future<Output = Result<bool, PetClinicError>> + Send;
}

impl<T: CustomerRepository + Send + Sync> CustomerRepository for Arc<T> {
    fn find_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Customer>, PetClinicError>> + Send {
        (**self).find_all()
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        (**self).find_by_pet_id(pet_id)
    }

    fn save(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, PetClinicError>> + Send {
        (**self).save(customer)
    }

    fn delete_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        (**self).delete_by_id(id)
    }

    fn exists_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        (**self).exists_by_id(id)
    }
}

impl<T: VetRepository + Send + Sync> VetRepository for Arc<T> {
    fn find_by_id(
        &self,
        id: VetId,
    ) -> impl Future<Output = Result<Option<Vet>, PetClinicError>> + Send {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Vet>, PetClinicError>> + Send {
        (**self).find_all()
    }

    fn save(&self, vet: Vet) -> impl Future<Output = Result<Vet, PetClinicError>> + Send {
        (**self).save(vet)
    }

    fn delete_by_id(&self, id: VetId) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        (**self).delete_by_id(id)
    }

    fn exists_by_id(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        (**self).exists_by_id(id)
    }
}

impl<T: VisitRepository + Send + Sync> VisitRepository for Arc<T> {
    fn find_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, PetClinicError>> + Send {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        (**self).find_all()
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        (**self).find_by_pet_id(pet_id)
    }

    fn find_by_vet_id(
        &self,
        vet_id: VetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        (**self).find_by_vet_id(vet_id)
    }

    fn save(&self, visit: Visit) -> impl Future<Output = Result<Visit, PetClinicError>> + Send {
        (**self).save(visit)
    }

    fn delete_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        (**self).delete_by_id(id)
    }

    fn exists_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        (**self).exists_by_id(id)
    }
}
