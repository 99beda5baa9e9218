//! Record store for animal types and pets.
//!
//! Every function takes any [`ConnectionTrait`] so it can run against the
//! shared connection or inside a transaction. Writes are awaited to
//! completion before returning.

use common::{AnimalType, Pet, PetPatch, PetStatus, Priority};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use thiserror::Error;
use tracing::warn;

use crate::entity::{animal_type, pet};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Animal type '{0}' already exists")]
    DuplicateAnimalType(String),

    #[error("Pet {0} not found")]
    PetNotFound(i32),

    #[error("No updates provided")]
    NoUpdates,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Fields accepted when inserting a pet. Missing status/priority take the defaults.
#[derive(Debug, Clone, Default)]
pub struct PetInsert {
    pub name: String,
    pub status: Option<PetStatus>,
    pub animal_type_id: Option<i32>,
    pub priority: Option<Priority>,
}

/// Pet row joined with its animal type name.
#[derive(Debug, FromQueryResult)]
struct PetRow {
    id: i32,
    name: String,
    status: PetStatus,
    animal_type_id: Option<i32>,
    animal_type: Option<String>,
    priority: Priority,
}

impl From<PetRow> for Pet {
    fn from(r: PetRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            status: r.status,
            animal_type_id: r.animal_type_id,
            animal_type: r.animal_type,
            priority: r.priority,
        }
    }
}

fn select_pet_rows() -> Select<pet::Entity> {
    pet::Entity::find()
        .select_only()
        .column(pet::Column::Id)
        .column(pet::Column::Name)
        .column(pet::Column::Status)
        .column(pet::Column::AnimalTypeId)
        .column_as(animal_type::Column::Name, "animal_type")
        .column(pet::Column::Priority)
        .join(JoinType::LeftJoin, pet::animal_type_join())
}

pub async fn create_animal_type<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<AnimalType, StoreError> {
    let model = animal_type::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    match model.insert(db).await {
        Ok(created) => Ok(created.into()),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            warn!(name, "Rejected duplicate animal type");
            Err(StoreError::DuplicateAnimalType(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// All animal types ordered by name ascending.
pub async fn list_animal_types<C: ConnectionTrait>(db: &C) -> Result<Vec<AnimalType>, StoreError> {
    let types = animal_type::Entity::find()
        .order_by_asc(animal_type::Column::Name)
        .all(db)
        .await?;
    Ok(types.into_iter().map(Into::into).collect())
}

/// Insert each name unless it already exists. Returns how many rows were added.
pub async fn ensure_animal_types<C: ConnectionTrait>(
    db: &C,
    names: &[&str],
) -> Result<u64, StoreError> {
    let mut inserted = 0u64;
    for &name in names {
        let model = animal_type::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = animal_type::Entity::insert(model)
            .on_conflict(
                OnConflict::column(animal_type::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(rows) => inserted += rows,
            Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(inserted)
}

pub async fn create_pet<C: ConnectionTrait>(db: &C, input: PetInsert) -> Result<Pet, StoreError> {
    let model = pet::ActiveModel {
        name: Set(input.name),
        status: Set(input.status.unwrap_or_default()),
        animal_type_id: Set(input.animal_type_id),
        priority: Set(input.priority.unwrap_or_default()),
        ..Default::default()
    };
    let created = model.insert(db).await?;

    get_pet(db, created.id).await
}

/// Read a single pet with its derived animal type name.
pub async fn find_pet<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Pet>, StoreError> {
    let row = select_pet_rows()
        .filter(pet::Column::Id.eq(id))
        .into_model::<PetRow>()
        .one(db)
        .await?;
    Ok(row.map(Into::into))
}

pub async fn get_pet<C: ConnectionTrait>(db: &C, id: i32) -> Result<Pet, StoreError> {
    find_pet(db, id).await?.ok_or(StoreError::PetNotFound(id))
}

/// All pets in insertion order, each with its derived animal type name.
pub async fn list_pets<C: ConnectionTrait>(db: &C) -> Result<Vec<Pet>, StoreError> {
    let rows = select_pet_rows()
        .order_by_asc(pet::Column::Id)
        .into_model::<PetRow>()
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn count_pets<C: ConnectionTrait>(db: &C) -> Result<u64, StoreError> {
    Ok(pet::Entity::find().count(db).await?)
}

/// Apply the status and/or priority in `patch`, leaving every other column untouched.
///
/// Existence is checked first, so an unknown id reports `PetNotFound` even when
/// the patch is empty.
pub async fn update_pet<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: &PetPatch,
) -> Result<(), StoreError> {
    let existing = pet::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::PetNotFound(id))?;

    if patch.is_empty() {
        return Err(StoreError::NoUpdates);
    }

    let mut active: pet::ActiveModel = existing.into();
    if let Some(status) = patch.status {
        active.status = Set(status);
    }
    if let Some(priority) = patch.priority {
        active.priority = Set(priority);
    }

    match active.update(db).await {
        Ok(_) => Ok(()),
        Err(DbErr::RecordNotUpdated) => Err(StoreError::PetNotFound(id)),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_pet<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), StoreError> {
    let exists = pet::Entity::find_by_id(id).one(db).await?.is_some();
    if !exists {
        return Err(StoreError::PetNotFound(id));
    }

    let result = pet::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::PetNotFound(id));
    }
    Ok(())
}
