//! HTTP handlers for duty endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{json_body, ErrorResponse};
use crate::application::handlers::duty::{
    CreateDutyCommand, CreateDutyHandler, DeleteDutyCommand, DeleteDutyHandler, GetDutyHandler,
    GetDutyLogsHandler, GetDutyLogsQuery, GetDutyQuery, GetPaginatedDutiesHandler,
    GetPaginatedDutiesQuery, UpdateDutyCommand, UpdateDutyHandler,
};
use crate::domain::duty::DutyError;
use crate::domain::foundation::DutyId;

use super::dto::{CreateDutyRequest, PaginationParams, UpdateDutyRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DutyHandlers {
    create_handler: Arc<CreateDutyHandler>,
    update_handler: Arc<UpdateDutyHandler>,
    delete_handler: Arc<DeleteDutyHandler>,
    get_handler: Arc<GetDutyHandler>,
    list_handler: Arc<GetPaginatedDutiesHandler>,
    logs_handler: Arc<GetDutyLogsHandler>,
}

impl DutyHandlers {
    pub fn new(
        create_handler: Arc<CreateDutyHandler>,
        update_handler: Arc<UpdateDutyHandler>,
        delete_handler: Arc<DeleteDutyHandler>,
        get_handler: Arc<GetDutyHandler>,
        list_handler: Arc<GetPaginatedDutiesHandler>,
        logs_handler: Arc<GetDutyLogsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
            logs_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/duties - Create a duty
pub async fn create_duty(
    State(handlers): State<DutyHandlers>,
    payload: Result<Json<CreateDutyRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = CreateDutyCommand {
        type_id: req.type_id(),
        name: req.name,
        description: req.description,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => handle_duty_error(e),
    }
}

/// GET /api/duties - List duties page by page
pub async fn list_duties(
    State(handlers): State<DutyHandlers>,
    Query(params): Query<PaginationParams>,
) -> Response {
    let query = GetPaginatedDutiesQuery::new(params.page, params.limit);

    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => handle_duty_error(e),
    }
}

/// GET /api/duties/:id - Get one duty
pub async fn get_duty(
    State(handlers): State<DutyHandlers>,
    Path(duty_id): Path<String>,
) -> Response {
    let duty_id = match parse_duty_id(&duty_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetDutyQuery { duty_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_duty_error(e),
    }
}

/// PUT /api/duties/:id - Replace a duty
pub async fn update_duty(
    State(handlers): State<DutyHandlers>,
    Path(duty_id): Path<String>,
    payload: Result<Json<UpdateDutyRequest>, JsonRejection>,
) -> Response {
    let duty_id = match parse_duty_id(&duty_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = UpdateDutyCommand {
        duty_id,
        type_id: req.type_id(),
        name: req.name,
        description: req.description,
        completed: req.completed,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_duty_error(e),
    }
}

/// DELETE /api/duties/:id - Soft-delete a duty
pub async fn delete_duty(
    State(handlers): State<DutyHandlers>,
    Path(duty_id): Path<String>,
) -> Response {
    let duty_id = match parse_duty_id(&duty_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.delete_handler.handle(DeleteDutyCommand { duty_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_duty_error(e),
    }
}

/// GET /api/duties/:id/logs - Audit trail of a duty
pub async fn get_duty_logs(
    State(handlers): State<DutyHandlers>,
    Path(duty_id): Path<String>,
) -> Response {
    let duty_id = match parse_duty_id(&duty_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.logs_handler.handle(GetDutyLogsQuery { duty_id }).await {
        Ok(logs) => (StatusCode::OK, Json(logs)).into_response(),
        Err(e) => handle_duty_error(e),
    }
}

fn parse_duty_id(raw: &str) -> Result<DutyId, Response> {
    raw.parse::<DutyId>().map_err(|_| {
        ErrorResponse::bad_request("Invalid duty ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_duty_error(error: DutyError) -> Response {
    let code = error.code().to_string();
    match error {
        DutyError::NotFound(_) => {
            ErrorResponse::new(code, error.message()).into_response_with(StatusCode::NOT_FOUND)
        }
        DutyError::ValidationFailed { ref field, .. } => {
            ErrorResponse::new(code, error.message())
                .with_details(serde_json::json!({ "field": field }))
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        DutyError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Duty request failed");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
