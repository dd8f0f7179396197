//! Pet — an animal owned by exactly one customer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PetClinicError, ValidationError};
use crate::id::{CustomerId, PetId, PetTypeId};

/// Kind of animal (cat, dog, …). Compared by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
}

impl PetType {
    #[must_use]
    pub fn new(id: PetTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for PetType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PetType {}

/// A pet belonging to a [`Customer`](crate::customer::Customer).
///
/// `owner_id` is a plain back-reference set by
/// [`Customer::add_pet`](crate::customer::Customer::add_pet); the customer
/// owns the pet, the pet only remembers who its owner is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    pub owner_id: Option<CustomerId>,
}

impl Pet {
    /// Create a builder for constructing a [`Pet`].
    #[must_use]
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// Check domain invariants relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when the name is blank, the
    /// birth date is missing or after `today`, or the type is missing.
    pub fn validate(&self, today: NaiveDate) -> Result<(), PetClinicError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Pet name").into());
        }
        match self.birth_date {
            None => return Err(ValidationError::Required("Birth date").into()),
            Some(date) if date > today => return Err(ValidationError::BirthDateInFuture.into()),
            Some(_) => {}
        }
        if self.pet_type.is_none() {
            return Err(ValidationError::Required("Pet type").into());
        }
        Ok(())
    }

    /// Whole years elapsed between the birth date and `today`.
    ///
    /// Returns 0 when the birth date is unknown or not yet reached.
    #[must_use]
    pub fn age_in_years(&self, today: NaiveDate) -> u32 {
        self.birth_date
            .and_then(|born| today.years_since(born))
            .unwrap_or(0)
    }

    /// Birth year, when known.
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|date| date.year())
    }
}

/// Step-by-step builder for [`Pet`].
#[derive(Debug, Default)]
pub struct PetBuilder {
    id: Option<PetId>,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
    pet_type: Option<PetType>,
}

impl PetBuilder {
    #[must_use]
    pub fn id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn pet_type(mut self, pet_type: PetType) -> Self {
        self.pet_type = Some(pet_type);
        self
    }

    /// Consume the builder, validate against `today`, and return a [`Pet`].
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if any invariant fails.
    pub fn build(self, today: NaiveDate) -> Result<Pet, PetClinicError> {
        let pet = Pet {
            id: self.id,
            name: self.name.unwrap_or_default(),
            birth_date: self.birth_date,
            pet_type: self.pet_type,
            owner_id: None,
        };
        pet.validate(today)?;
        Ok(pet)
    }
}
