use std::collections::HashMap;

use common::{PetStatus, Priority};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::entity::animal_type::DEFAULT_ANIMAL_TYPES;
use crate::store::{self, PetInsert, StoreError};

/// Animal types loaded with the sample data set.
const SAMPLE_ANIMAL_TYPES: &[&str] = &[
    "Dog", "Cat", "Bird", "Rabbit", "Hamster", "Fish", "Turtle", "Chicken", "Snake",
];

/// Sample pets: (name, status, animal type, priority).
const SAMPLE_PETS: &[(&str, PetStatus, &str, Priority)] = &[
    ("Max", PetStatus::AvailableForAdoption, "Dog", Priority::Medium),
    ("Bella", PetStatus::Adopted, "Dog", Priority::Low),
    ("Charlie", PetStatus::InCareNotAdopted, "Cat", Priority::High),
    ("Luna", PetStatus::AvailableForAdoption, "Cat", Priority::Medium),
    ("Oliver", PetStatus::Adopted, "Rabbit", Priority::Low),
    ("Lucy", PetStatus::InCareAdopted, "Bird", Priority::Medium),
    ("Cooper", PetStatus::AvailableForAdoption, "Hamster", Priority::Low),
    ("Daisy", PetStatus::InCareNotAdopted, "Turtle", Priority::High),
    ("Milo", PetStatus::Adopted, "Dog", Priority::High),
    ("Zoe", PetStatus::AvailableForAdoption, "Fish", Priority::Low),
    ("Rocky", PetStatus::InCareAdopted, "Dog", Priority::Medium),
    ("Lily", PetStatus::AvailableForAdoption, "Chicken", Priority::Medium),
    ("Duke", PetStatus::Adopted, "Cat", Priority::Low),
    ("Coco", PetStatus::InCareNotAdopted, "Bird", Priority::High),
    ("Henry", PetStatus::Adopted, "Chicken", Priority::High),
];

/// Seed the default animal types, skipping any that already exist.
pub async fn seed_animal_types(db: &DatabaseConnection) -> Result<(), StoreError> {
    let inserted = store::ensure_animal_types(db, DEFAULT_ANIMAL_TYPES).await?;
    if inserted > 0 {
        info!("Seeded {} new animal types", inserted);
    }
    Ok(())
}

/// Load the sample data set into an empty pets table.
///
/// Returns the number of pets inserted; zero when the table already had rows.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<usize, StoreError> {
    if store::count_pets(db).await? > 0 {
        info!("Pets table is not empty, skipping sample data");
        return Ok(0);
    }

    store::ensure_animal_types(db, SAMPLE_ANIMAL_TYPES).await?;
    let type_ids: HashMap<String, i32> = store::list_animal_types(db)
        .await?
        .into_iter()
        .map(|t| (t.name, t.id))
        .collect();

    let mut inserted = 0;
    for &(name, status, animal_type, priority) in SAMPLE_PETS {
        let Some(&animal_type_id) = type_ids.get(animal_type) else {
            warn!(pet = name, animal_type, "Animal type not found, skipping sample pet");
            continue;
        };

        store::create_pet(
            db,
            PetInsert {
                name: name.to_string(),
                status: Some(status),
                animal_type_id: Some(animal_type_id),
                priority: Some(priority),
            },
        )
        .await?;
        inserted += 1;
    }

    info!(
        animal_types = type_ids.len(),
        pets = inserted,
        "Sample data seeding completed"
    );
    Ok(inserted)
}
