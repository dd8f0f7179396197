//! Vet service — use-cases for managing veterinarians.

use petclinic_domain::error::{NotFoundError, PetClinicError};
use petclinic_domain::event::DomainEvent;
use petclinic_domain::id::VetId;
use petclinic_domain::vet::Vet;

use super::{assigned_id, publish, require_new, require_valid_id};
use crate::ports::{EventPublisher, VetRepository};

/// Business service for vet operations.
pub struct VetBusinessService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: VetRepository, P: EventPublisher> VetBusinessService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// Look up a vet by id.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive, or a
    /// storage error from the repository.
    pub async fn find_by_id(&self, id: VetId) -> Result<Option<Vet>, PetClinicError> {
        require_valid_id(id.is_valid(), "Vet")?;
        self.repo.find_by_id(id).await
    }

    /// List all vets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Vet>, PetClinicError> {
        self.repo.find_all().await
    }

    /// Register a new vet and publish [`DomainEvent::VetCreated`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if the vet already has an id or
    /// a name is blank, or a storage error from the repository.
    #[tracing::instrument(skip(self, vet), fields(vet_name = %vet.full_name()))]
    pub async fn create_vet(&self, vet: Vet) -> Result<Vet, PetClinicError> {
        require_new(vet.id, "vet")?;
        vet.validate()?;

        let saved = self.repo.save(vet).await?;
        let id = assigned_id(saved.id, "vet")?;

        publish(
            &self.publisher,
            DomainEvent::VetCreated {
                vet_id: id,
                vet_name: saved.full_name(),
            },
        )
        .await;
        tracing::info!(vet_id = %id, "vet created");
        Ok(saved)
    }

    /// Rename an existing vet and publish [`DomainEvent::VetUpdated`].
    ///
    /// Only first and last name are copied from `data`; specialties are left
    /// as stored.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no vet has this id,
    /// [`PetClinicError::Validation`] when a name in `data` is blank, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, data))]
    pub async fn update_vet(&self, id: VetId, data: Vet) -> Result<Vet, PetClinicError> {
        require_valid_id(id.is_valid(), "Vet")?;

        let mut existing = self.get_existing(id).await?;
        data.validate()?;
        existing.first_name = data.first_name;
        existing.last_name = data.last_name;

        let updated = self.repo.save(existing).await?;

        publish(
            &self.publisher,
            DomainEvent::VetUpdated {
                vet_id: id,
                vet_name: updated.full_name(),
            },
        )
        .await;
        tracing::info!("vet updated");
        Ok(updated)
    }

    /// Delete a vet.
    ///
    /// No event is published; the vets module has no deletion event.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when `id` is not positive,
    /// [`PetClinicError::NotFound`] when no vet has this id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_vet(&self, id: VetId) -> Result<(), PetClinicError> {
        require_valid_id(id.is_valid(), "Vet")?;

        self.get_existing(id).await?;
        self.repo.delete_by_id(id).await?;

        tracing::info!("vet deleted");
        Ok(())
    }

    async fn get_existing(&self, id: VetId) -> Result<Vet, PetClinicError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Vet(id).into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use petclinic_domain::error::ValidationError;
    use petclinic_domain::id::SpecialtyId;
    use petclinic_domain::vet::Specialty;

    use super::*;
    use crate::testing::{FakeVetRepo, RecordingPublisher};

    type Service = VetBusinessService<Arc<FakeVetRepo>, Arc<RecordingPublisher>>;

    fn make_service() -> (Service, Arc<FakeVetRepo>, Arc<RecordingPublisher>) {
        let repo = Arc::new(FakeVetRepo::default());
        let events = Arc::new(RecordingPublisher::default());
        let service = VetBusinessService::new(repo.clone(), events.clone());
        (service, repo, events)
    }

    fn carter() -> Vet {
        Vet::builder()
            .first_name("James")
            .last_name("Carter")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_vet_and_publish_created_event() {
        let (svc, repo, events) = make_service();

        let created = svc.create_vet(carter()).await.unwrap();

        let id = created.id.unwrap();
        assert!(repo.stored(id).is_some());
        assert_eq!(
            events.events(),
            vec![DomainEvent::VetCreated {
                vet_id: id,
                vet_name: "James Carter".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn should_reject_create_when_name_blank() {
        let (svc, repo, events) = make_service();
        let mut vet = carter();
        vet.first_name = String::new();

        let result = svc.create_vet(vet).await;

        assert!(matches!(
            result,
            Err(PetClinicError::Validation(ValidationError::Required("First name")))
        ));
        assert_eq!(repo.calls.total(), 0);
        assert!(events.events().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_id_already_assigned() {
        let (svc, repo, _) = make_service();
        let mut vet = carter();
        vet.id = Some(VetId::new(1));

        let result = svc.create_vet(vet).await;

        assert!(matches!(
            result,
            Err(PetClinicError::Validation(ValidationError::IdAlreadyAssigned(_)))
        ));
        assert_eq!(repo.calls.total(), 0);
    }

    #[tokio::test]
    async fn should_publish_single_updated_event_with_new_name() {
        let (svc, _, events) = make_service();
        let id = svc.create_vet(carter()).await.unwrap().id.unwrap();
        let mut data = carter();
        data.last_name = "Wilson".to_string();

        let updated = svc.update_vet(id, data).await.unwrap();

        assert_eq!(updated.full_name(), "James Wilson");
        let updates: Vec<_> = events
            .events()
            .into_iter()
            .filter(|event| matches!(event, DomainEvent::VetUpdated { .. }))
            .collect();
        assert_eq!(
            updates,
            vec![DomainEvent::VetUpdated {
                vet_id: id,
                vet_name: "James Wilson".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn should_keep_specialties_when_updating() {
        let (svc, _, _) = make_service();
        let vet = Vet::builder()
            .first_name("Helen")
            .last_name("Leary")
            .specialty(Specialty::new(SpecialtyId::new(1), "radiology"))
            .build()
            .unwrap();
        let id = svc.create_vet(vet).await.unwrap().id.unwrap();
        let data = Vet::builder()
            .first_name("Helen")
            .last_name("Stevens")
            .build()
            .unwrap();

        let updated = svc.update_vet(id, data).await.unwrap();

        assert_eq!(updated.nr_of_specialties(), 1);
        assert_eq!(updated.last_name, "Stevens");
    }

    #[tokio::test]
    async fn should_fail_update_when_vet_missing() {
        let (svc, repo, events) = make_service();

        let result = svc.update_vet(VetId::new(8), carter()).await;

        assert!(matches!(
            result,
            Err(PetClinicError::NotFound(NotFoundError::Vet(_)))
        ));
        assert_eq!(repo.calls.saves(), 0);
        assert!(events.events().is_empty());
    }

    #[tokio::test]
    async fn should_report_missing_vet_before_blank_name() {
        let (svc, repo, events) = make_service();
        let mut data = carter();
        data.last_name = "  ".to_string();

        let result = svc.update_vet(VetId::new(8), data).await;

        assert!(matches!(
            result,
            Err(PetClinicError::NotFound(NotFoundError::Vet(id))) if id.get() == 8
        ));
        assert_eq!(repo.calls.saves(), 0);
        assert!(events.events().is_empty());
    }

    #[tokio::test]
    async fn should_reject_non_positive_ids_without_io() {
        let (svc, repo, events) = make_service();
        let id = VetId::new(0);

        assert!(matches!(
            svc.find_by_id(id).await,
            Err(PetClinicError::Validation(_))
        ));
        assert!(matches!(
            svc.update_vet(id, carter()).await,
            Err(PetClinicError::Validation(_))
        ));
        assert!(matches!(
            svc.delete_vet(VetId::new(-5)).await,
            Err(PetClinicError::Validation(_))
        ));
        assert_eq!(repo.calls.total(), 0);
        assert!(events.events().is_empty());
    }

    #[tokio::test]
    async fn should_delete_vet_without_publishing_event() {
        let (svc, repo, events) = make_service();
        let id = svc.create_vet(carter()).await.unwrap().id.unwrap();

        svc.delete_vet(id).await.unwrap();

        assert!(repo.stored(id).is_none());
        // only the creation is announced; vets have no deletion event
        assert_eq!(events.events().len(), 1);
    }

    #[tokio::test]
    async fn should_fail_delete_when_vet_missing() {
        let (svc, repo, _) = make_service();

        let result = svc.delete_vet(VetId::new(999)).await;

        assert!(matches!(
            result,
            Err(PetClinicError::NotFound(NotFoundError::Vet(id))) if id.get() == 999
        ));
        assert_eq!(repo.calls.deletes(), 0);
    }

    #[tokio::test]
    async fn should_list_all_vets() {
        let (svc, _, _) = make_service();
        svc.create_vet(carter()).await.unwrap();
        svc.create_vet(
            Vet::builder()
                .first_name("Linda")
                .last_name("Douglas")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(svc.find_all().await.unwrap().len(), 2);
    }
}
