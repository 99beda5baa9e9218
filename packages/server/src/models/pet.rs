use common::{PetStatus, Priority};
use serde::Deserialize;

use crate::error::AppError;
use crate::store::PetInsert;

use super::shared::require_name;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePetRequest {
    #[schema(example = "Bella")]
    pub name: Option<String>,
    /// Defaults to "Available for Adoption" when missing, null or empty.
    #[serde(default, deserialize_with = "common::pet::empty_as_none")]
    pub status: Option<PetStatus>,
    pub animal_type_id: Option<i32>,
    /// Defaults to "Medium" when missing, null or empty.
    #[serde(default, deserialize_with = "common::pet::empty_as_none")]
    pub priority: Option<Priority>,
}

impl CreatePetRequest {
    pub fn into_insert(self) -> Result<PetInsert, AppError> {
        let name = require_name(self.name.as_deref(), "Pet name is required")?;
        Ok(PetInsert {
            name,
            status: self.status,
            animal_type_id: self.animal_type_id,
            priority: self.priority,
        })
    }
}
