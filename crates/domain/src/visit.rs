//! Visit — an appointment of a pet with a vet, and its lifecycle.
//!
//! ```text
//! SCHEDULED ──complete()──▶ COMPLETED
//!     │
//!     └──────cancel()─────▶ CANCELLED
//! ```
//!
//! Both terminal states are final; `cancel()` on an already cancelled visit
//! is a no-op.

mod status;

pub use status::VisitStatus;

use serde::{Deserialize, Serialize};

use crate::error::{IllegalStateError, PetClinicError, ValidationError};
use crate::id::{PetId, VetId, VisitId};
use crate::time::{Timestamp, now};

/// Upper bound on the length of a visit description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 8192;

/// A visit of a pet to a vet.
///
/// Pet and vet are referenced by id only; their existence is checked by the
/// visit service through validator ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<VisitId>,
    pub pet_id: PetId,
    pub vet_id: VetId,
    pub visit_date: Option<Timestamp>,
    pub description: Option<String>,
    status: VisitStatus,
}

impl Visit {
    /// A scheduled visit dated now, with no description.
    #[must_use]
    pub fn new(pet_id: PetId, vet_id: VetId) -> Self {
        Self {
            id: None,
            pet_id,
            vet_id,
            visit_date: Some(now()),
            description: None,
            status: VisitStatus::Scheduled,
        }
    }

    /// Create a builder for constructing a [`Visit`].
    #[must_use]
    pub fn builder() -> VisitBuilder {
        VisitBuilder::default()
    }

    #[must_use]
    pub fn status(&self) -> VisitStatus {
        self.status
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.status == VisitStatus::Scheduled
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == VisitStatus::Completed
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == VisitStatus::Cancelled
    }

    /// Check the invariants required before a visit can be scheduled.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when the pet or vet id is not
    /// positive, or the description is longer than [`MAX_DESCRIPTION_LEN`].
    pub fn validate_for_scheduling(&self) -> Result<(), PetClinicError> {
        if !self.pet_id.is_valid() {
            return Err(ValidationError::NonPositiveId("Pet").into());
        }
        if !self.vet_id.is_valid() {
            return Err(ValidationError::NonPositiveId("Vet").into());
        }
        if let Some(description) = &self.description {
            let actual = description.chars().count();
            if actual > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::DescriptionTooLong {
                    max: MAX_DESCRIPTION_LEN,
                    actual,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Validate and put the visit in the `Scheduled` state, dating it now if
    /// no date was given.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if [`validate_for_scheduling`](Self::validate_for_scheduling) fails.
    pub fn schedule(&mut self) -> Result<(), PetClinicError> {
        self.validate_for_scheduling()?;
        self.status = VisitStatus::Scheduled;
        if self.visit_date.is_none() {
            self.visit_date = Some(now());
        }
        Ok(())
    }

    /// Mark a scheduled visit as completed.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError::NotScheduled`] unless the visit is scheduled.
    pub fn complete(&mut self) -> Result<(), IllegalStateError> {
        if self.status != VisitStatus::Scheduled {
            return Err(IllegalStateError::NotScheduled);
        }
        self.status = VisitStatus::Completed;
        Ok(())
    }

    /// Cancel the visit.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError::AlreadyCompleted`] if the visit is completed.
    pub fn cancel(&mut self) -> Result<(), IllegalStateError> {
        if self.status == VisitStatus::Completed {
            return Err(IllegalStateError::AlreadyCompleted);
        }
        self.status = VisitStatus::Cancelled;
        Ok(())
    }
}

/// Step-by-step builder for [`Visit`].
#[derive(Debug, Default)]
pub struct VisitBuilder {
    pet_id: Option<PetId>,
    vet_id: Option<VetId>,
    visit_date: Option<Timestamp>,
    description: Option<String>,
}

impl VisitBuilder {
    #[must_use]
    pub fn pet_id(mut self, pet_id: PetId) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    #[must_use]
    pub fn vet_id(mut self, vet_id: VetId) -> Self {
        self.vet_id = Some(vet_id);
        self
    }

    #[must_use]
    pub fn visit_date(mut self, visit_date: Timestamp) -> Self {
        self.visit_date = Some(visit_date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return a scheduled [`Visit`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if a reference is missing or
    /// not positive, or the description is too long.
    pub fn build(self) -> Result<Visit, PetClinicError> {
        let visit = Visit {
            id: None,
            pet_id: self.pet_id.unwrap_or(PetId::new(0)),
            vet_id: self.vet_id.unwrap_or(VetId::new(0)),
            visit_date: Some(self.visit_date.unwrap_or_else(now)),
            description: self.description,
            status: VisitStatus::Scheduled,
        };
        visit.validate_for_scheduling()?;
        Ok(visit)
    }
}
