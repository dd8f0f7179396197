//! Customer service — use-cases for customers and the pets they own.

use petclinic_domain::customer::Customer;
use petclinic_domain::error::{NotFoundError, PetClinicError};
use petclinic_domain::event::DomainEvent;
use petclinic_domain::id::{CustomerId, PetId};
use petclinic_domain::pet::Pet;
use petclinic_domain::time::today;

use super::{assigned_id, publish, require_new, require_valid_id};
use crate::ports::{CustomerRepository, EventPublisher};

/// Business service for customer and pet operations.
pub struct CustomerBusinessService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: CustomerRepository, P: EventPublisher> CustomerBusinessService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// Look up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive, or a
    /// storage error from the repository.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PetClinicError> {
        require_valid_id(id.is_valid(), "Customer")?;
        self.repo.find_by_id(id).await
    }

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Customer>, PetClinicError> {
        self.repo.find_all().await
    }

    /// Register a new customer and publish [`DomainEvent::CustomerCreated`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if the customer already has an
    /// id or breaks an invariant, or a storage error from the repository.
    #[tracing::instrument(skip(self, customer), fields(customer_name = %customer.full_name()))]
    pub async fn create_customer(&self, customer: Customer) -> Result<Customer, PetClinicError> {
        require_new(customer.id, "customer")?;
        customer.validate()?;

        let saved = self.repo.save(customer).await?;
        let id = assigned_id(saved.id, "customer")?;

        publish(
            &self.publisher,
            DomainEvent::CustomerCreated {
                customer_id: id,
                customer_name: saved.full_name(),
            },
        )
        .await;
        tracing::info!(customer_id = %id, "customer created");
        Ok(saved)
    }

    /// Replace the contact details of an existing customer and publish
    /// [`DomainEvent::CustomerUpdated`].
    ///
    /// Only names, address, city and telephone are copied from `data`; the id
    /// and the pets of the stored customer are kept.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no customer has this id,
    /// [`PetClinicError::Validation`] when `data` breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, data))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        data: Customer,
    ) -> Result<Customer, PetClinicError> {
        require_valid_id(id.is_valid(), "Customer")?;

        let mut existing = self.get_existing(id).await?;
        data.validate()?;
        existing.apply_contact_details(data);

        let updated = self.repo.save(existing).await?;

        publish(
            &self.publisher,
            DomainEvent::CustomerUpdated {
                customer_id: id,
                customer_name: updated.full_name(),
            },
        )
        .await;
        tracing::info!("customer updated");
        Ok(updated)
    }

    /// Delete a customer and publish [`DomainEvent::CustomerDeleted`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no customer has this id, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), PetClinicError> {
        require_valid_id(id.is_valid(), "Customer")?;

        let existing = self.get_existing(id).await?;
        self.repo.delete_by_id(id).await?;

        publish(
            &self.publisher,
            DomainEvent::CustomerDeleted {
                customer_id: id,
                customer_name: existing.full_name(),
            },
        )
        .await;
        tracing::info!("customer deleted");
        Ok(())
    }

    /// Look up a pet by id across all customers.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive, or a
    /// storage error from the repository.
    pub async fn find_pet(&self, id: PetId) -> Result<Option<Pet>, PetClinicError> {
        require_valid_id(id.is_valid(), "Pet")?;
        let owner = self.repo.find_by_pet_id(id).await?;
        Ok(owner.and_then(|customer| {
            customer
                .pets()
                .iter()
                .find(|pet| pet.id == Some(id))
                .cloned()
        }))
    }

    /// Register a new pet for an existing customer.
    ///
    /// Returns the stored pet, carrying its new id and owner.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `owner_id` is not positive
    /// or the pet already has an id or breaks an invariant,
    /// [`PetClinicError::NotFound`] when the owner does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, pet), fields(pet_name = %pet.name))]
    pub async fn add_pet(&self, owner_id: CustomerId, pet: Pet) -> Result<Pet, PetClinicError> {
        require_valid_id(owner_id.is_valid(), "Customer")?;
        require_new(pet.id, "pet")?;
        pet.validate(today())?;

        let mut owner = self.get_existing(owner_id).await?;
        let known: Vec<PetId> = owner.pets().iter().filter_map(|pet| pet.id).collect();
        owner.add_pet(pet);

        let saved = self.repo.save(owner).await?;
        let added = saved
            .pets()
            .iter()
            .filter(|pet| pet.id.is_some_and(|id| !known.contains(&id)))
            .max_by_key(|pet| pet.id)
            .cloned()
            .ok_or_else(|| PetClinicError::Storage("repository dropped the added pet".into()))?;
        tracing::info!(pet_id = ?added.id, "pet added");
        Ok(added)
    }

    /// Replace name, birth date and type of an existing pet.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive or
    /// `data` breaks an invariant, [`PetClinicError::NotFound`] when no pet
    /// has this id, or a storage error from the repository.
    #[tracing::instrument(skip(self, data))]
    pub async fn update_pet(&self, id: PetId, data: Pet) -> Result<Pet, PetClinicError> {
        require_valid_id(id.is_valid(), "Pet")?;

        let mut owner = self
            .repo
            .find_by_pet_id(id)
            .await?
            .ok_or(NotFoundError::Pet(id))?;
        data.validate(today())?;
        let pet = owner.pet_mut(id).ok_or(NotFoundError::Pet(id))?;
        pet.name = data.name;
        pet.birth_date = data.birth_date;
        pet.pet_type = data.pet_type;

        let saved = self.repo.save(owner).await?;
        let updated = saved.pets().iter().find(|pet| pet.id == Some(id)).cloned();
        tracing::info!("pet updated");
        updated.ok_or_else(|| NotFoundError::Pet(id).into())
    }

    async fn get_existing(&self, id: CustomerId) -> Result<Customer, PetClinicError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Customer(id).into())
    }
}
