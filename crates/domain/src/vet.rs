//! Vet — a veterinarian and the specialties they practice.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PetClinicError, ValidationError};
use crate::id::{SpecialtyId, VetId};

/// A medical specialty (radiology, surgery, …). Compared by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: String,
}

impl Specialty {
    #[must_use]
    pub fn new(id: SpecialtyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Specialty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Specialty {}

/// A veterinarian working at the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    pub id: Option<VetId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "unique_specialties")]
    specialties: Vec<Specialty>,
}

/// Drop repeated specialty ids, keeping the first occurrence.
fn unique_specialties<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Specialty>, D::Error> {
    let mut unique: Vec<Specialty> = Vec::new();
    for specialty in Vec::<Specialty>::deserialize(deserializer)? {
        if !unique.contains(&specialty) {
            unique.push(specialty);
        }
    }
    Ok(unique)
}

impl Vet {
    /// Create a builder for constructing a [`Vet`].
    #[must_use]
    pub fn builder() -> VetBuilder {
        VetBuilder::default()
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    #[must_use]
    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }

    /// Add a specialty unless one with the same id is already present.
    ///
    /// Returns `true` when the specialty was added.
    pub fn add_specialty(&mut self, specialty: Specialty) -> bool {
        if self.specialties.contains(&specialty) {
            return false;
        }
        self.specialties.push(specialty);
        true
    }

    /// Remove the specialty with the given id. Returns `true` when one was removed.
    pub fn remove_specialty(&mut self, id: SpecialtyId) -> bool {
        let before = self.specialties.len();
        self.specialties.retain(|specialty| specialty.id != id);
        self.specialties.len() != before
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when the first or last name is blank.
    pub fn validate(&self) -> Result<(), PetClinicError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::Required("First name").into());
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::Required("Last name").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Vet`].
#[derive(Debug, Default)]
pub struct VetBuilder {
    id: Option<VetId>,
    first_name: Option<String>,
    last_name: Option<String>,
    specialties: Vec<Specialty>,
}

impl VetBuilder {
    #[must_use]
    pub fn id(mut self, id: VetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn specialty(mut self, specialty: Specialty) -> Self {
        self.specialties.push(specialty);
        self
    }

    /// Consume the builder, validate, and return a [`Vet`].
    ///
    /// Duplicate specialties are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if a name is missing or blank.
    pub fn build(self) -> Result<Vet, PetClinicError> {
        let mut vet = Vet {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            specialties: Vec::with_capacity(self.specialties.len()),
        };
        for specialty in self.specialties {
            vet.add_specialty(specialty);
        }
        vet.validate()?;
        Ok(vet)
    }
}
