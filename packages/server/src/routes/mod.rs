use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{animal_type, health, pet};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            animal_type::list_animal_types,
            animal_type::create_animal_type
        ))
        .routes(routes!(pet::list_pets, pet::create_pet))
        .routes(routes!(pet::update_pet, pet::delete_pet))
        .routes(routes!(health::health))
}
