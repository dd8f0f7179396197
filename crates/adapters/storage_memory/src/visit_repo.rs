//! In-memory implementation of [`VisitRepository`].

use std::future::Future;

use petclinic_app::ports::VisitRepository;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{PetId, VetId, VisitId};
use petclinic_domain::visit::Visit;

use crate::error::StorageError;
use crate::table::Table;

/// Visit repository backed by an ordered map.
pub struct InMemoryVisitRepository {
    visits: Table<VisitId, Visit>,
}

impl Default for InMemoryVisitRepository {
    fn default() -> Self {
        Self {
            visits: Table::new("visits"),
        }
    }
}

impl InMemoryVisitRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(&self, predicate: impl Fn(&Visit) -> bool) -> Result<Vec<Visit>, StorageError> {
        self.visits.with(|t| {
            Ok(t.rows
                .values()
                .filter(|visit| predicate(visit))
                .cloned()
                .collect())
        })
    }
}

impl VisitRepository for InMemoryVisitRepository {
    fn find_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, PetClinicError>> + Send {
        let found = self.visits.with(|t| Ok(t.rows.get(&id).cloned()));
        async move { Ok(found?) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        let all = self.filtered(|_| true);
        async move { Ok(all?) }
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        let matching = self.filtered(|visit| visit.pet_id == pet_id);
        async move { Ok(matching?) }
    }

    fn find_by_vet_id(
        &self,
        vet_id: VetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        let matching = self.filtered(|visit| visit.vet_id == vet_id);
        async move { Ok(matching?) }
    }

    fn save(&self, mut visit: Visit) -> impl Future<Output = Result<Visit, PetClinicError>> + Send {
        let saved = self.visits.with(|t| {
            let id = match visit.id {
                Some(id) => {
                    t.ids.observe(id.get());
                    id
                }
                None => VisitId::new(t.ids.next()?),
            };
            visit.id = Some(id);
            t.rows.insert(id, visit.clone());
            Ok(visit)
        });
        async move { Ok(saved?) }
    }

    fn delete_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        let deleted = self.visits.with(|t| {
            t.rows.remove(&id);
            Ok(())
        });
        async move { Ok(deleted?) }
    }

    fn exists_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        let exists = self.visits.with(|t| Ok(t.rows.contains_key(&id)));
        async move { Ok(exists?) }
    }
}
