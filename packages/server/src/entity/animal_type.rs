use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Animal types seeded on every startup.
pub const DEFAULT_ANIMAL_TYPES: &[&str] = &["Dog", "Cat", "Bird", "Rabbit", "Fish"];

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique, compared case-sensitively by the database.
    #[sea_orm(unique)]
    pub name: String,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::AnimalType {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
