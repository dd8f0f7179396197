//! In-memory fakes for the ports, shared by the service tests.
//!
//! Repositories count their calls so tests can assert that a failed
//! operation never reached persistence.

use std::collections::{BTreeMap, HashSet};
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use petclinic_domain::customer::Customer;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::event::DomainEvent;
use petclinic_domain::id::{CustomerId, PetId, VetId, VisitId};
use petclinic_domain::vet::Vet;
use petclinic_domain::visit::Visit;

use crate::ports::{
    CustomerRepository, EventPublisher, PetValidator, VetRepository, VetValidator, VisitRepository,
};

/// Per-repository call counters.
#[derive(Default)]
pub struct Calls {
    reads: AtomicUsize,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl Calls {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.reads() + self.saves() + self.deletes()
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn save(&self) {
        self.saves.fetch_add(1, Ordering::SeqCst);
    }

    fn delete(&self) {
        self.deletes.fetch_add(1, Ordering::SeqCst);
    }
}

fn simulated_failure() -> PetClinicError {
    PetClinicError::Storage(Box::new(std::io::Error::other(
        "simulated storage failure",
    )))
}

// ---------------------------------------------------------------------------
// Event publisher
// ---------------------------------------------------------------------------

/// Publisher that records every event it receives.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<DomainEvent>>,
    fail: bool,
}

impl RecordingPublisher {
    /// A publisher that records events but reports every publish as failed.
    pub fn failing() -> Self {
        Self {
            events: Mutex::default(),
            fail: true,
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(
        &self,
        event: DomainEvent,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        self.events.lock().unwrap().push(event);
        let result = if self.fail {
            Err(simulated_failure())
        } else {
            Ok(())
        };
        async { result }
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validator that knows a fixed set of ids.
#[derive(Default)]
pub struct StubValidator {
    known: HashSet<i32>,
    calls: AtomicUsize,
}

impl StubValidator {
    pub fn knowing(ids: &[i32]) -> Self {
        Self {
            known: ids.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, id: i32) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.known.contains(&id)
    }
}

impl PetValidator for StubValidator {
    fn pet_exists(&self, id: PetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        let exists = self.check(id.get());
        async move { Ok(exists) }
    }
}

impl VetValidator for StubValidator {
    fn vet_exists(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        let exists = self.check(id.get());
        async move { Ok(exists) }
    }
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

struct Store<K, V> {
    records: BTreeMap<K, V>,
    next_id: i32,
}

impl<K, V> Default for Store<K, V> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<K, V> Store<K, V> {
    fn next(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
pub struct FakeCustomerRepo {
    store: Mutex<Store<CustomerId, Customer>>,
    next_pet_id: Mutex<i32>,
    fail_saves: bool,
    reverse_pets: bool,
    pub calls: Calls,
}

impl FakeCustomerRepo {
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Store pets newest first, like an adapter without ordering guarantees.
    pub fn reversing_pets() -> Self {
        Self {
            reverse_pets: true,
            ..Self::default()
        }
    }

    pub fn stored(&self, id: CustomerId) -> Option<Customer> {
        self.store.lock().unwrap().records.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().records.len()
    }
}

impl CustomerRepository for FakeCustomerRepo {
    fn find_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        self.calls.read();
        let result = self.stored(id);
        async { Ok(result) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Customer>, PetClinicError>> + Send {
        self.calls.read();
        let result: Vec<Customer> = self.store.lock().unwrap().records.values().cloned().collect();
        async { Ok(result) }
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Option<Customer>, PetClinicError>> + Send {
        self.calls.read();
        let result = self
            .store
            .lock()
            .unwrap()
            .records
            .values()
            .find(|customer| customer.pets().iter().any(|pet| pet.id == Some(pet_id)))
            .cloned();
        async { Ok(result) }
    }

    fn save(
        &self,
        mut customer: Customer,
    ) -> impl Future<Output = Result<Customer, PetClinicError>> + Send {
        self.calls.save();
        let result = if self.fail_saves {
            Err(simulated_failure())
        } else {
            let mut store = self.store.lock().unwrap();
            let id = customer.id.unwrap_or_else(|| CustomerId::new(store.next()));
            customer.id = Some(id);
            let mut next_pet_id = self.next_pet_id.lock().unwrap();
            customer.assign_missing_pet_ids(|| {
                *next_pet_id += 1;
                PetId::new(*next_pet_id)
            });
            customer.sync_pet_owners();
            if self.reverse_pets {
                let ids: Vec<PetId> = customer.pets().iter().filter_map(|pet| pet.id).collect();
                let pets: Vec<_> = ids.into_iter().filter_map(|id| customer.remove_pet(id)).collect();
                for pet in pets.into_iter().rev() {
                    customer.add_pet(pet);
                }
            }
            store.records.insert(id, customer.clone());
            Ok(customer)
        };
        async { result }
    }

    fn delete_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        self.calls.delete();
        self.store.lock().unwrap().records.remove(&id);
        async { Ok(()) }
    }

    fn exists_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        self.calls.read();
        let exists = self.store.lock().unwrap().records.contains_key(&id);
        async move { Ok(exists) }
    }
}

#[derive(Default)]
pub struct FakeVetRepo {
    store: Mutex<Store<VetId, Vet>>,
    pub calls: Calls,
}

impl FakeVetRepo {
    pub fn stored(&self, id: VetId) -> Option<Vet> {
        self.store.lock().unwrap().records.get(&id).cloned()
    }
}

impl VetRepository for FakeVetRepo {
    fn find_by_id(
        &self,
        id: VetId,
    ) -> impl Future<Output = Result<Option<Vet>, PetClinicError>> + Send {
        self.calls.read();
        let result = self.stored(id);
        async { Ok(result) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Vet>, PetClinicError>> + Send {
        self.calls.read();
        let result: Vec<Vet> = self.store.lock().unwrap().records.values().cloned().collect();
        async { Ok(result) }
    }

    fn save(&self, mut vet: Vet) -> impl Future<Output = Result<Vet, PetClinicError>> + Send {
        self.calls.save();
        let mut store = self.store.lock().unwrap();
        let id = vet.id.unwrap_or_else(|| VetId::new(store.next()));
        vet.id = Some(id);
        store.records.insert(id, vet.clone());
        async { Ok(vet) }
    }

    fn delete_by_id(&self, id: VetId) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        self.calls.delete();
        self.store.lock().unwrap().records.remove(&id);
        async { Ok(()) }
    }

    fn exists_by_id(&self, id: VetId) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        self.calls.read();
        let exists = self.store.lock().unwrap().records.contains_key(&id);
        async move { Ok(exists) }
    }
}

#[derive(Default)]
pub struct FakeVisitRepo {
    store: Mutex<Store<VisitId, Visit>>,
    pub calls: Calls,
}

impl FakeVisitRepo {
    pub fn stored(&self, id: VisitId) -> Option<Visit> {
        self.store.lock().unwrap().records.get(&id).cloned()
    }
}

impl VisitRepository for FakeVisitRepo {
    fn find_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, PetClinicError>> + Send {
        self.calls.read();
        let result = self.stored(id);
        async { Ok(result) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        self.calls.read();
        let result: Vec<Visit> = self.store.lock().unwrap().records.values().cloned().collect();
        async { Ok(result) }
    }

    fn find_by_pet_id(
        &self,
        pet_id: PetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        self.calls.read();
        let result: Vec<Visit> = self
            .store
            .lock()
            .unwrap()
            .records
            .values()
            .filter(|visit| visit.pet_id == pet_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn find_by_vet_id(
        &self,
        vet_id: VetId,
    ) -> impl Future<Output = Result<Vec<Visit>, PetClinicError>> + Send {
        self.calls.read();
        let result: Vec<Visit> = self
            .store
            .lock()
            .unwrap()
            .records
            .values()
            .filter(|visit| visit.vet_id == vet_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn save(&self, mut visit: Visit) -> impl Future<Output = Result<Visit, PetClinicError>> + Send {
        self.calls.save();
        let mut store = self.store.lock().unwrap();
        let id = visit.id.unwrap_or_else(|| VisitId::new(store.next()));
        visit.id = Some(id);
        store.records.insert(id, visit.clone());
        async { Ok(visit) }
    }

    fn delete_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<(), PetClinicError>> + Send {
        self.calls.delete();
        self.store.lock().unwrap().records.remove(&id);
        async { Ok(()) }
    }

    fn exists_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<bool, PetClinicError>> + Send {
        self.calls.read();
        let exists = self.store.lock().unwrap().records.contains_key(&id);
        async move { Ok(exists) }
    }
}
