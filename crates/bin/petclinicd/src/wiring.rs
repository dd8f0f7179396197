//! Concrete service graph for the in-memory deployment.

use std::sync::Arc;

use petclinic_adapter_storage_memory::{
    InMemoryCustomerRepository, InMemoryVetRepository, InMemoryVisitRepository,
};
use petclinic_app::event_bus::InProcessEventBus;
use petclinic_app::services::{
    CustomerBusinessService, VetBusinessService, VisitBusinessService,
};
use petclinic_app::validators::{CustomerServicePetValidator, VetServiceVetValidator};

pub type EventBus = Arc<InProcessEventBus>;
pub type Customers = CustomerBusinessService<InMemoryCustomerRepository, EventBus>;
pub type Vets = VetBusinessService<InMemoryVetRepository, EventBus>;
pub type Visits = VisitBusinessService<
    InMemoryVisitRepository,
    CustomerServicePetValidator<InMemoryCustomerRepository, EventBus>,
    VetServiceVetValidator<InMemoryVetRepository, EventBus>,
    EventBus,
>;

/// The three business services, sharing one event bus.
pub struct Services {
    pub customers: Arc<Customers>,
    pub vets: Arc<Vets>,
    pub visits: Visits,
}

impl Services {
    /// Wire repositories into services, then hand the customers and vets
    /// services to the visits module through its validator ports.
    #[must_use]
    pub fn build(bus: &EventBus) -> Self {
        let customers = Arc::new(CustomerBusinessService::new(
            InMemoryCustomerRepository::new(),
            bus.clone(),
        ));
        let vets = Arc::new(VetBusinessService::new(
            InMemoryVetRepository::new(),
            bus.clone(),
        ));
        let visits = VisitBusinessService::new(
            InMemoryVisitRepository::new(),
            CustomerServicePetValidator::new(customers.clone()),
            VetServiceVetValidator::new(vets.clone()),
            bus.clone(),
        );
        Self {
            customers,
            vets,
            visits,
        }
    }
}
