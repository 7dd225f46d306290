//! Application router.
//!
//! Wires storage ports into handlers and mounts every endpoint.
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe (no auth)
//! - `/api/duties` - Duty endpoints (bearer auth)
//! - `/api/types` - Type endpoints (bearer auth)

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::duty::{duty_routes, DutyHandlers};
use super::duty_type::{duty_type_routes, DutyTypeHandlers};
use super::middleware::require_bearer;
use crate::adapters::memory::{
    InMemoryDutyLogRepository, InMemoryDutyRepository, InMemoryDutyTypeRepository,
};
use crate::application::handlers::duty::{
    AuditLogHandler, CreateDutyHandler, DeleteDutyHandler, GetDutyHandler, GetDutyLogsHandler,
    GetPaginatedDutiesHandler, UpdateDutyHandler,
};
use crate::application::handlers::duty_type::{
    CreateTypeHandler, GetTypeHandler, ListTypesHandler, UpdateTypeHandler,
};
use crate::config::ServerConfig;
use crate::ports::{DutyEventHandler, DutyLogRepository, DutyRepository, DutyTypeRepository};

/// Storage ports shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub duties: Arc<dyn DutyRepository>,
    pub types: Arc<dyn DutyTypeRepository>,
    pub logs: Arc<dyn DutyLogRepository>,
}

impl AppState {
    pub fn new(
        duties: Arc<dyn DutyRepository>,
        types: Arc<dyn DutyTypeRepository>,
        logs: Arc<dyn DutyLogRepository>,
    ) -> Self {
        Self {
            duties,
            types,
            logs,
        }
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::in_memory_with_types(InMemoryDutyTypeRepository::new())
    }

    /// State backed by in-memory stores, with a pre-seeded type store.
    pub fn in_memory_with_types(types: InMemoryDutyTypeRepository) -> Self {
        let duties = InMemoryDutyRepository::new(types.clone());
        Self::new(
            Arc::new(duties),
            Arc::new(types),
            Arc::new(InMemoryDutyLogRepository::new()),
        )
    }

    fn event_handler(&self) -> Arc<dyn DutyEventHandler> {
        Arc::new(AuditLogHandler::new(self.logs.clone()))
    }

    pub fn duty_handlers(&self) -> DutyHandlers {
        let events = self.event_handler();
        DutyHandlers::new(
            Arc::new(CreateDutyHandler::new(
                self.duties.clone(),
                self.types.clone(),
                events.clone(),
            )),
            Arc::new(UpdateDutyHandler::new(
                self.duties.clone(),
                self.types.clone(),
                events.clone(),
            )),
            Arc::new(DeleteDutyHandler::new(self.duties.clone(), events)),
            Arc::new(GetDutyHandler::new(self.duties.clone())),
            Arc::new(GetPaginatedDutiesHandler::new(self.duties.clone())),
            Arc::new(GetDutyLogsHandler::new(self.logs.clone())),
        )
    }

    pub fn duty_type_handlers(&self) -> DutyTypeHandlers {
        DutyTypeHandlers::new(
            Arc::new(CreateTypeHandler::new(self.types.clone())),
            Arc::new(UpdateTypeHandler::new(self.types.clone())),
            Arc::new(GetTypeHandler::new(self.types.clone())),
            Arc::new(ListTypesHandler::new(self.types.clone())),
        )
    }
}

/// Routes under `/api`, guarded by the bearer stub.
pub fn api_routes(state: &AppState) -> Router {
    Router::new()
        .nest("/duties", duty_routes(state.duty_handlers()))
        .nest("/types", duty_type_routes(state.duty_type_handlers()))
        .route_layer(middleware::from_fn(require_bearer))
}

/// The complete application with tracing, CORS and request timeout.
pub fn app_router(state: &AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(state))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
