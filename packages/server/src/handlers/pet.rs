use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DeletePetResponse, Pet, PetPatch, UpdatePetResponse};
use tracing::{instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::pet::CreatePetRequest;
use crate::state::AppState;
use crate::store::{self, StoreError};

#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    operation_id = "listPets",
    summary = "List pets",
    description = "Returns every pet with its derived `animal_type` name (null when the pet has no type or the type no longer exists).",
    responses(
        (status = 200, description = "All pets", body = Vec<Pet>),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, AppError> {
    let pets = store::list_pets(&state.db).await?;
    Ok(Json(pets))
}

#[utoipa::path(
    post,
    path = "/pets",
    tag = "Pets",
    operation_id = "createPet",
    summary = "Create a pet",
    description = "Creates a pet. `status` defaults to \"Available for Adoption\" and `priority` to \"Medium\".",
    request_body = CreatePetRequest,
    responses(
        (status = 201, description = "Pet created", body = Pet),
        (status = 400, description = "Name missing or invalid field value (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_pet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let insert = payload.into_insert()?;
    let created = store::create_pet(&state.db, insert).await?;
    tracing::info!(id = created.id, name = %created.name, "Pet created");

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "Pets",
    operation_id = "updatePet",
    summary = "Update a pet's status and/or priority",
    description = "Applies only `status` and `priority`; every other field in the body is ignored. If the update succeeds but the row cannot be read back, the response carries `petId` instead of `pet`.",
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = PetPatch,
    responses(
        (status = 200, description = "Pet updated", body = UpdatePetResponse),
        (status = 400, description = "Neither field provided or malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Pet not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, patch))]
pub async fn update_pet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<PetPatch>,
) -> Result<Json<UpdatePetResponse>, AppError> {
    store::update_pet(&state.db, id, &patch).await?;

    let read_back = store::find_pet(&state.db, id).await;
    Ok(Json(update_response(id, read_back)))
}

/// The update already committed, so a failed read-back still answers 200.
fn update_response(id: i32, read_back: Result<Option<Pet>, StoreError>) -> UpdatePetResponse {
    match read_back {
        Ok(Some(pet)) => UpdatePetResponse::updated(pet),
        Ok(None) => {
            warn!(id, "Updated pet vanished before it could be read back");
            UpdatePetResponse::degraded(id)
        }
        Err(e) => {
            warn!(id, error = %e, "Failed to read back updated pet");
            UpdatePetResponse::degraded(id)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "Pets",
    operation_id = "deletePet",
    summary = "Delete a pet",
    description = "Deletes a pet. Its animal type is left in place.",
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet deleted", body = DeletePetResponse),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Pet not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_pet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeletePetResponse>, AppError> {
    store::delete_pet(&state.db, id).await?;
    tracing::info!(id, "Pet deleted");

    Ok(Json(DeletePetResponse {
        message: "Pet deleted successfully".into(),
        id,
    }))
}
