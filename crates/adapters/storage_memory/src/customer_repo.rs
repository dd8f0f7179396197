//! In-memory implementation of [`CustomerRepository`].

use std::future::Future;
use std::sync::Mutex;

use petclinic_app::ports::CustomerRepository;
use petclinic_domain::customer::Customer;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{CustomerId, PetId};

use crate::error::StorageError;
use crate::table::{Sequence, Table};

/// Customer repository keeping owners and their pets in memory.
///
/// Pet ids come from a sequence shared by all customers, so a pet id is
/// unique across the whole store.
pub struct InMemoryCustomerRepository {
    customers: Table<CustomerId, Customer>,
    pet_ids: Mutex<Sequence>,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            customers: Table::new("customers"),
            pet_ids: Mutex::new(Sequence::new("pets")),
        }
    }
}

impl InMemoryCustomerRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_pet_ids(&self, customer: &mut Customer) -> Result<(), StorageError> {
        let mut pet_ids = self
            .pet_ids
            .lock()
            .map_err(|_| StorageError::Poisoned("pets"))?;
        for pet in customer.pets() {
            if let Some(id) = pet.id {
                pet_ids.observe(id.get());
            }
        }
        let missing = customer.pets().iter().filter(|pet| pet.id.is_none()).count();
        let mut next = pet_ids.reserve(missing)?;
        customer.assign_missing_pet_ids(|| {
            let id = PetId::new(next);
            next += 1;
            id
        });
        Ok(())
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn find_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        let found = self.customers.with(|t| Ok(t.rows.get(&id).cloned()));
        async move { Ok(found?) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Customer>, PetClinicError>> + Send {
        let all = self
            .customers
            .with(|t| Ok(t.rows.values().cloned().collect()));
        async move { Ok(all?) }
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        let found = self.customers.with(|t| {
            Ok(t.rows
                .values()
                .find(|customer| customer.pets().iter().any(|pet| pet.id == Some(pet_id)))
                .cloned())
        });
        async move { Ok(found?) }
    }

    fn save(
        &self,
        mut customer: Customer,
    ) -> impl Future<Output = Result<Customer, PetClinicError>> + Send {
        let saved = self.customers.with(|t| {
            let id = match customer.id {
                Some(id) => {
                    t.ids.observe(id.get());
                    id
                }
                None => CustomerId::new(t.ids.next()?),
            };
            customer.id = Some(id);
            self.assign_pet_ids(&mut customer)?;
            customer.sync_pet_owners();
            t.rows.insert(id, customer.clone());
            Ok(customer)
        });
        async move { Ok(saved?) }
    }

    fn delete_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        let deleted = self.customers.with(|t| {
            t.rows.remove(&id);
            Ok(())
        });
        async move { Ok(deleted?) }
    }

    fn exists_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        let exists = self.customers.with(|t| Ok(t.rows.contains_key(&id)));
        async move { Ok(exists?) }
    }
}
