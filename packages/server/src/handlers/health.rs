use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;

use crate::error::ErrorBody;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    operation_id = "health",
    summary = "Database reachability check",
    responses(
        (status = 200, description = "Service is healthy (DB reachable)"),
        (status = 503, description = "Service is unhealthy (DB unreachable)", body = ErrorBody),
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let backend = state.db.get_database_backend();
    match state
        .db
        .execute_raw(Statement::from_string(backend, "SELECT 1".to_owned()))
        .await
    {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody {
                    error: format!("DB ping failed: {e}"),
                    code: "INTERNAL_ERROR",
                }),
            )
                .into_response()
        }
    }
}
