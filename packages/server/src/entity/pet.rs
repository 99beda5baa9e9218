use common::{PetStatus, Priority};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub status: PetStatus,

    /// Soft reference to `animal_types.id`. Not backed by a foreign key
    /// constraint; a dangling id reads back with no animal type name.
    #[sea_orm(indexed)]
    pub animal_type_id: Option<i32>,

    pub priority: Priority,
}

impl ActiveModelBehavior for ActiveModel {}

/// Left-join path from a pet to its animal type, used to derive `animal_type`.
pub fn animal_type_join() -> RelationDef {
    Entity::belongs_to(super::animal_type::Entity)
        .from(Column::AnimalTypeId)
        .to(super::animal_type::Column::Id)
        .into()
}
