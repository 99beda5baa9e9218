use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{PetStatus, Priority};

/// A named category pets may be tagged with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnimalType {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Dog")]
    pub name: String,
}

/// A pet row as served by `GET /pets`.
///
/// `animal_type` is derived at read time from `animal_type_id` and is `None`
/// when the pet has no type or the referenced type does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Pet {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Bella")]
    pub name: String,
    pub status: PetStatus,
    pub animal_type_id: Option<i32>,
    #[schema(example = "Dog")]
    pub animal_type: Option<String>,
    pub priority: Priority,
}

/// Body of `POST /pets` as sent by clients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Body of `POST /animal-types` as sent by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimalType {
    pub name: String,
}

/// Body of `PUT /pets/{id}`: a targeted patch of status and/or priority.
///
/// Any other field in the JSON body is ignored. An empty string counts as
/// "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PetPatch {
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<PetStatus>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

impl PetPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}

/// Body returned by `PUT /pets/{id}`.
///
/// Carries the refreshed row under `pet`; when the mutation succeeded but the
/// row could not be read back, only `petId` is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePetResponse {
    #[schema(example = "Pet updated successfully")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<Pet>,
    #[serde(
        default,
        rename = "petId",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_id: Option<i32>,
}

impl UpdatePetResponse {
    pub fn updated(pet: Pet) -> Self {
        Self {
            message: "Pet updated successfully".into(),
            pet: Some(pet),
            pet_id: None,
        }
    }

    pub fn degraded(pet_id: i32) -> Self {
        Self {
            message: "Pet updated successfully, but unable to retrieve updated details".into(),
            pet: None,
            pet_id: Some(pet_id),
        }
    }
}

/// Body returned by `DELETE /pets/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletePetResponse {
    #[schema(example = "Pet deleted successfully")]
    pub message: String,
    pub id: i32,
}

/// Deserialize an optional enum where `null`, a missing key and `""` all mean "absent".
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => s.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}
