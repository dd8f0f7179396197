//! Demo data loaded at startup.
//!
//! Everything goes through the business services, so seeding exercises the
//! same validation and publishes the same events as any other caller.

use chrono::NaiveDate;
use petclinic_domain::customer::Customer;
use petclinic_domain::error::PetClinicError;
use petclinic_domain::id::{PetTypeId, SpecialtyId};
use petclinic_domain::pet::{Pet, PetType};
use petclinic_domain::time::today;
use petclinic_domain::vet::{Specialty, Vet};
use petclinic_domain::visit::Visit;

use crate::wiring::Services;

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A hard-coded birth date does not exist in the calendar.
    #[error("invalid seed date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A service rejected the demo data.
    #[error(transparent)]
    Service(#[from] PetClinicError),
}

const VETS: &[(&str, &str, &[&str])] = &[
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["dentistry", "surgery"]),
    ("Rafael", "Ortega", &["surgery"]),
    ("Henry", "Stevens", &["radiology"]),
    ("Sharon", "Jenkins", &[]),
];

fn specialty(name: &str) -> Specialty {
    let id = match name {
        "radiology" => 1,
        "surgery" => 2,
        _ => 3,
    };
    Specialty::new(SpecialtyId::new(id), name)
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SeedError::InvalidDate { year, month, day })
}

/// Load the demo vets, two owners with their pets and a first visit.
///
/// # Errors
///
/// Returns [`SeedError`] when a service rejects the data.
pub async fn seed(services: &Services) -> Result<(), SeedError> {
    let mut carter = None;
    for (first_name, last_name, specialties) in VETS {
        let vet = specialties
            .iter()
            .fold(
                Vet::builder().first_name(*first_name).last_name(*last_name),
                |builder, name| builder.specialty(specialty(name)),
            )
            .build()?;
        let vet = services.vets.create_vet(vet).await?;
        if carter.is_none() {
            carter = Some(vet);
        }
    }

    let owners = [
        (
            Customer::builder()
                .first_name("George")
                .last_name("Franklin")
                .address("110 W. Liberty St.")
                .city("Madison")
                .telephone("6085551023")
                .build()?,
            Pet::builder()
                .name("Leo")
                .birth_date(date(2010, 9, 7)?)
                .pet_type(PetType::new(PetTypeId::new(1), "cat"))
                .build(today())?,
        ),
        (
            Customer::builder()
                .first_name("Betty")
                .last_name("Davis")
                .address("638 Cardinal Ave.")
                .city("Sun Prairie")
                .telephone("6085551749")
                .build()?,
            Pet::builder()
                .name("Basil")
                .birth_date(date(2012, 8, 6)?)
                .pet_type(PetType::new(PetTypeId::new(6), "hamster"))
                .build(today())?,
        ),
    ];

    let mut leo = None;
    for (owner, pet) in owners {
        let owner = services.customers.create_customer(owner).await?;
        if let Some(owner_id) = owner.id {
            let pet = services.customers.add_pet(owner_id, pet).await?;
            if leo.is_none() {
                leo = Some(pet);
            }
        }
    }

    if let (Some(pet_id), Some(vet_id)) = (
        leo.and_then(|pet| pet.id),
        carter.and_then(|vet| vet.id),
    ) {
        let visit = Visit::builder()
            .pet_id(pet_id)
            .vet_id(vet_id)
            .description("rabies shot")
            .build()?;
        services.visits.schedule_visit(visit).await?;
    }

    tracing::info!(vets = VETS.len(), "demo data loaded");
    Ok(())
}
