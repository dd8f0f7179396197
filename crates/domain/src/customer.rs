//! Customer — a pet owner registered with the clinic.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PetClinicError, ValidationError};
use crate::id::{CustomerId, PetId};
use crate::pet::Pet;

static TELEPHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,12}$").expect("telephone pattern is valid"));

/// A pet owner and the pets they own.
///
/// `id` stays `None` until the customer has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    #[serde(default)]
    pets: Vec<Pet>,
}

impl Customer {
    /// Create a builder for constructing a [`Customer`].
    #[must_use]
    pub fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }

    /// First and last name separated by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pets owned by this customer, in the order they were added.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Mutable access to an owned pet by id.
    pub fn pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == Some(id))
    }

    /// Take ownership of `pet`, recording this customer as its owner.
    pub fn add_pet(&mut self, mut pet: Pet) {
        pet.owner_id = self.id;
        self.pets.push(pet);
    }

    /// Drop the pet with the given id, if owned. Returns the removed pet.
    pub fn remove_pet(&mut self, id: PetId) -> Option<Pet> {
        let index = self.pets.iter().position(|pet| pet.id == Some(id))?;
        Some(self.pets.remove(index))
    }

    /// Replace the owner back-reference on every pet with the current id.
    ///
    /// Repositories call this after assigning an id to a new customer.
    pub fn sync_pet_owners(&mut self) {
        let owner = self.id;
        for pet in &mut self.pets {
            pet.owner_id = owner;
        }
    }

    /// Give every pet that has no id yet one drawn from `next_id`.
    pub fn assign_missing_pet_ids(&mut self, mut next_id: impl FnMut() -> PetId) {
        for pet in self.pets.iter_mut().filter(|pet| pet.id.is_none()) {
            pet.id = Some(next_id());
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] when a required field is blank
    /// or the telephone is not 10 to 12 digits.
    pub fn validate(&self) -> Result<(), PetClinicError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Address", &self.address),
            ("City", &self.city),
            ("Telephone", &self.telephone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Required(field).into());
            }
        }
        if !TELEPHONE.is_match(&self.telephone) {
            return Err(ValidationError::InvalidTelephone.into());
        }
        Ok(())
    }

    /// Copy the editable contact fields from `data`, leaving id and pets untouched.
    pub fn apply_contact_details(&mut self, data: Customer) {
        self.first_name = data.first_name;
        self.last_name = data.last_name;
        self.address = data.address;
        self.city = data.city;
        self.telephone = data.telephone;
    }
}

/// Step-by-step builder for [`Customer`].
#[derive(Debug, Default)]
pub struct CustomerBuilder {
    id: Option<CustomerId>,
    first_name: Option<String>,
    last_name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    telephone: Option<String>,
}

impl CustomerBuilder {
    #[must_use]
    pub fn id(mut self, id: CustomerId) -> Self {
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
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    /// Consume the builder, validate, and return a [`Customer`] with no pets.
    ///
    /// # Errors
    ///
    /// Returns [`PetClinicError::Validation`] if any field is blank or the
    /// telephone is malformed.
    pub fn build(self) -> Result<Customer, PetClinicError> {
        let customer = Customer {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            telephone: self.telephone.unwrap_or_default(),
            pets: Vec::new(),
        };
        customer.validate()?;
        Ok(customer)
    }
}
