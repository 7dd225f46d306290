//! HTTP routes for duty endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_duty, delete_duty, get_duty, get_duty_logs, list_duties, update_duty, DutyHandlers,
};

/// Creates the duty router, to be nested under `/api/duties`.
pub fn duty_routes(handlers: DutyHandlers) -> Router {
    Router::new()
        .route("/", get(list_duties).post(create_duty))
        .route("/:id", get(get_duty).put(update_duty).delete(delete_duty))
        .route("/:id/logs", get(get_duty_logs))
        .with_state(handlers)
}
