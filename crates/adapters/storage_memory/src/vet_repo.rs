//! In-memory implementation of [`VetRepository`].

use std::future::Future;

use petclinic_app::ports::VetRepository;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::VetId;
use petclinic_domain::vet::Vet;

use crate::table::Table;

/// Vet repository backed by an ordered map.
pub struct InMemoryVetRepository {
    vets: Table<VetId, Vet>,
}

impl Default for InMemoryVetRepository {
    fn default() -> Self {
        Self {
            vets: Table::new("vets"),
        }
    }
}

impl InMemoryVetRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VetRepository for InMemoryVetRepository {
    fn find_by_id(
        &self,
        id: VetId,
    ) -> impl Future<Output = Result<Option<Vet>, PetClinicError>> + Send {
        let found = self.vets.with(|t| Ok(t.rows.get(&id).cloned()));
        async move { Ok(found?) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Vet>, PetClinicError>> + Send {
        let all = self.vets.with(|t| Ok(t.rows.values().cloned().collect()));
        async move { Ok(all?) }
    }

    fn save(&self, mut vet: Vet) -> impl Future<Output = Result<Vet, PetClinicError>> + Send {
        let saved = self.vets.with(|t| {
            let id = match vet.id {
                Some(id) => {
                    t.ids.observe(id.get());
                    id
                }
                None => VetId::new(t.ids.next()?),
            };
            vet.id = Some(id);
            t.rows.insert(id, vet.clone());
            Ok(vet)
        });
        async move { Ok(saved?) }
    }

    fn delete_by_id(&self, id: VetId) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        let deleted = self.vets.with(|t| {
            t.rows.remove(&id);
            Ok(())
        });
        async move { Ok(deleted?) }
    }

    fn exists_by_id(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        let exists = self.vets.with(|t| Ok(t.rows.contains_key(&id)));
        async move { Ok(exists?) }
    }
}
