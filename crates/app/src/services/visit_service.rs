//! Visit service — scheduling visits and driving their lifecycle.
//!
//! Pets and vets live in other modules. Their existence is checked through
//! the [`PetValidator`] and [`VetValidator`] ports, never by reading their
//! storage.

use petclinic_domain::error::{InvalidVisitError, NotFoundError, PetClinicError};
use petclinic_domain::event::DomainEvent;
use petclinic_domain::id::{PetId, VetId, VisitId};
use petclinic_domain::visit::Visit;

use super::{assigned_id, publish, require_new, require_valid_id};
use crate::ports::{EventPublisher, PetValidator, VetValidator, VisitRepository};

/// Business service for visit operations.
pub struct VisitBusinessService<R, PV, VV, P> {
    repo: R,
    pet_validator: PV,
    vet_validator: VV,
    publisher: P,
}

impl<R, PV, VV, P> VisitBusinessService<R, PV, VV, P>
where
    R: VisitRepository,
    PV: PetValidator,
    VV: VetValidator,
    P: EventPublisher,
{
    /// Create a new service from its repository, validators and publisher.
    pub fn new(repo: R, pet_validator: PV, vet_validator: VV, publisher: P) -> Self {
        Self {
            repo,
            pet_validator,
            vet_validator,
            publisher,
        }
    }

    /// Look up a visit by id.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive, or a
    /// storage error from the repository.
    pub async fn find_by_id(&self, id: VisitId) -> Result<Option<Visit>, PetClinicError> {
        require_valid_id(id.is_valid(), "Visit")?;
        self.repo.find_by_id(id).await
    }

    /// List all visits.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Visit>, PetClinicError> {
        self.repo.find_all().await
    }

    /// List the visits of one pet.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `pet_id` is not positive,
    /// or a storage error from the repository.
    pub async fn find_by_pet_id(&self, pet_id: PetId) -> Result<Vec<Visit>, PetClinicError> {
        require_valid_id(pet_id.is_valid(), "Pet")?;
        self.repo.find_by_pet_id(pet_id).await
    }

    /// List the visits handled by one vet.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `vet_id` is not positive,
    /// or a storage error from the repository.
    pub async fn find_by_vet_id(&self, vet_id: VetId) -> Result<Vec<Visit>, PetClinicError> {
        require_valid_id(vet_id.is_valid(), "Vet")?;
        self.repo.find_by_vet_id(vet_id).await
    }

    /// Schedule a new visit and publish [`DomainEvent::VisitCreated`].
    ///
    /// The pet is checked before the vet. Nothing is stored or published when
    /// either is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if the visit already has an id
    /// or breaks an invariant, [`PetClinicError::InvalidVisit`] when the pet
    /// or vet does not exist, or a storage error.
    #[tracing::instrument(skip(self, visit), fields(pet_id = %visit.pet_id, vet_id = %visit.vet_id))]
    pub async fn schedule_visit(&self, mut visit: Visit) -> Result<Visit, PetClinicError> {
        require_new(visit.id, "visit")?;
        visit.validate_for_scheduling()?;

        if !self.pet_validator.pet_exists(visit.pet_id).await? {
            return Err(InvalidVisitError::PetNotFound(visit.pet_id).into());
        }
        if !self.vet_validator.vet_exists(visit.vet_id).await? {
            return Err(InvalidVisitError::VetNotFound(visit.vet_id).into());
        }

        visit.schedule()?;
        let saved = self.repo.save(visit).await?;
        let id = assigned_id(saved.id, "visit")?;

        publish(
            &self.publisher,
            DomainEvent::VisitCreated {
                visit_id: id,
                pet_id: saved.pet_id,
                vet_id: saved.vet_id,
            },
        )
        .await;
        tracing::info!(visit_id = %id, "visit scheduled");
        Ok(saved)
    }

    /// Complete a scheduled visit and publish [`DomainEvent::VisitCompleted`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no visit has this id,
    /// [`PetClinicError::InvalidVisit`] when the visit is not scheduled, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn complete_visit(&self, id: VisitId) -> Result<Visit, PetClinicError> {
        require_valid_id(id.is_valid(), "Visit")?;

        let mut visit = self.get_existing(id).await?;
        visit.complete().map_err(InvalidVisitError::from)?;

        let completed = self.repo.save(visit).await?;

        publish(
            &self.publisher,
            DomainEvent::VisitCompleted {
                visit_id: id,
                pet_id: completed.pet_id,
                vet_id: completed.vet_id,
            },
        )
        .await;
        tracing::info!("visit completed");
        Ok(completed)
    }

    /// Cancel a visit that has not been completed.
    ///
    /// No event is published; the visits module has no cancellation event.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no visit has this id,
    /// [`PetClinicError::InvalidVisit`] when the visit is already completed,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_visit(&self, id: VisitId) -> Result<Visit, PetClinicError> {
        require_valid_id(id.is_valid(), "Visit")?;

        let mut visit = self.get_existing(id).await?;
        visit.cancel().map_err(InvalidVisitError::from)?;

        let cancelled = self.repo.save(visit).await?;
        tracing::info!("visit cancelled");
        Ok(cancelled)
    }

    async fn get_existing(&self, id: VisitId) -> Result<Visit, PetClinicError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Visit(id).into())
    }
}
