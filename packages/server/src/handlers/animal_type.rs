use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::AnimalType;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::animal_type::CreateAnimalTypeRequest;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/animal-types",
    tag = "Animal Types",
    operation_id = "listAnimalTypes",
    summary = "List animal types",
    description = "Returns every animal type, sorted by name ascending.",
    responses(
        (status = 200, description = "Animal types sorted by name", body = Vec<AnimalType>),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_animal_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnimalType>>, AppError> {
    let types = store::list_animal_types(&state.db).await?;
    Ok(Json(types))
}

#[utoipa::path(
    post,
    path = "/animal-types",
    tag = "Animal Types",
    operation_id = "createAnimalType",
    summary = "Create an animal type",
    description = "Creates a new animal type. Names are unique (case-sensitive); a duplicate is reported as a storage failure.",
    request_body = CreateAnimalTypeRequest,
    responses(
        (status = 201, description = "Animal type created", body = AnimalType),
        (status = 400, description = "Name missing (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure or duplicate name (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_animal_type(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAnimalTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.validated_name()?;
    let created = store::create_animal_type(&state.db, &name).await?;
    tracing::info!(id = created.id, name = %created.name, "Animal type created");

    Ok((StatusCode::CREATED, Json(created)))
}
