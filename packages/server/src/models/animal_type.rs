use serde::Deserialize;

use crate::error::AppError;

use super::shared::require_name;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateAnimalTypeRequest {
    #[schema(example = "Hamster")]
    pub name: Option<String>,
}

impl CreateAnimalTypeRequest {
    pub fn validated_name(&self) -> Result<String, AppError> {
        require_name(self.name.as_deref(), "Animal type name is required")
    }
}
