//! Domain events — immutable records of committed state changes.
//!
//! Events carry ids and display names only, never entity values, so that
//! consumers in other modules cannot couple to the producer's internals.

use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, PetId, VetId, VisitId};

/// Something that happened in one of the clinic modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    CustomerCreated {
        customer_id: CustomerId,
        customer_name: String,
    },
    CustomerUpdated {
        customer_id: CustomerId,
        customer_name: String,
    },
    CustomerDeleted {
        customer_id: CustomerId,
        customer_name: String,
    },
    VetCreated {
        vet_id: VetId,
        vet_name: String,
    },
    VetUpdated {
        vet_id: VetId,
        vet_name: String,
    },
    VisitCreated {
        visit_id: VisitId,
        pet_id: PetId,
        vet_id: VetId,
    },
    VisitCompleted {
        visit_id: VisitId,
        pet_id: PetId,
        vet_id: VetId,
    },
}

impl DomainEvent {
    /// Event name, identical to the serialized `type` tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CustomerCreated { .. } => "CustomerCreated",
            Self::CustomerUpdated { .. } => "CustomerUpdated",
            Self::CustomerDeleted { .. } => "CustomerDeleted",
            Self::VetCreated { .. } => "VetCreated",
            Self::VetUpdated { .. } => "VetUpdated",
            Self::VisitCreated { .. } => "VisitCreated",
            Self::VisitCompleted { .. } => "VisitCompleted",
        }
    }
}

impl std::fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CustomerCreated {
                customer_id,
                customer_name,
            }
            | Self::CustomerUpdated {
                customer_id,
                customer_name,
            }
            | Self::CustomerDeleted {
                customer_id,
                customer_name,
            } => write!(f, "{} customer={customer_id} name={customer_name:?}", self.name()),
            Self::VetCreated { vet_id, vet_name } | Self::VetUpdated { vet_id, vet_name } => {
                write!(f, "{} vet={vet_id} name={vet_name:?}", self.name())
            }
            Self::VisitCreated {
                visit_id,
                pet_id,
                vet_id,
            }
            | Self::VisitCompleted {
                visit_id,
                pet_id,
                vet_id,
            } => write!(
                f,
                "{} visit={visit_id} pet={pet_id} vet={vet_id}",
                self.name()
            ),
        }
    }
}
