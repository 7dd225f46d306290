//! HTTP routes for duty type endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_type, get_type, list_types, update_type, DutyTypeHandlers};

/// Creates the type router, to be nested under `/api/types`.
pub fn duty_type_routes(handlers: DutyTypeHandlers) -> Router {
    Router::new()
        .route("/", get(list_types).post(create_type))
        .route("/:id", get(get_type).put(update_type))
        .with_state(handlers)
}
