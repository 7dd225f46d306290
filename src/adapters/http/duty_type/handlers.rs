//! HTTP handlers for duty type endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{json_body, ErrorResponse};
use crate::application::handlers::duty_type::{
    CreateTypeCommand, CreateTypeHandler, GetTypeHandler, GetTypeQuery, ListTypesHandler,
    ListTypesQuery, UpdateTypeCommand, UpdateTypeHandler,
};
use crate::domain::duty_type::DutyTypeError;
use crate::domain::foundation::DutyTypeId;

use super::dto::TypeRequest;

#[derive(Clone)]
pub struct DutyTypeHandlers {
    create_handler: Arc<CreateTypeHandler>,
    update_handler: Arc<UpdateTypeHandler>,
    get_handler: Arc<GetTypeHandler>,
    list_handler: Arc<ListTypesHandler>,
}

impl DutyTypeHandlers {
    pub fn new(
        create_handler: Arc<CreateTypeHandler>,
        update_handler: Arc<UpdateTypeHandler>,
        get_handler: Arc<GetTypeHandler>,
        list_handler: Arc<ListTypesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            get_handler,
            list_handler,
        }
    }
}

/// GET /api/types - All types ordered by name
pub async fn list_types(State(handlers): State<DutyTypeHandlers>) -> Response {
    match handlers.list_handler.handle(ListTypesQuery).await {
        Ok(types) => (StatusCode::OK, Json(types)).into_response(),
        Err(e) => handle_type_error(e),
    }
}

/// POST /api/types - Create a type
pub async fn create_type(
    State(handlers): State<DutyTypeHandlers>,
    payload: Result<Json<TypeRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match handlers
        .create_handler
        .handle(CreateTypeCommand { name: req.name })
        .await
    {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => handle_type_error(e),
    }
}

/// GET /api/types/:id - Get one type
pub async fn get_type(
    State(handlers): State<DutyTypeHandlers>,
    Path(type_id): Path<String>,
) -> Response {
    let type_id = match parse_type_id(type_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetTypeQuery { type_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_type_error(e),
    }
}

/// PUT /api/types/:id - Rename a type
pub async fn update_type(
    State(handlers): State<DutyTypeHandlers>,
    Path(type_id): Path<String>,
    payload: Result<Json<TypeRequest>, JsonRejection>,
) -> Response {
    let type_id = match parse_type_id(type_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = UpdateTypeCommand {
        type_id,
        name: req.name,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_type_error(e),
    }
}

fn parse_type_id(raw: String) -> Result<DutyTypeId, Response> {
    DutyTypeId::new(raw).map_err(|_| {
        ErrorResponse::bad_request("Invalid type ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

fn handle_type_error(error: DutyTypeError) -> Response {
    let code = error.code().to_string();
    match error {
        DutyTypeError::NotFound(_) => {
            ErrorResponse::new(code, error.message()).into_response_with(StatusCode::NOT_FOUND)
        }
        DutyTypeError::ValidationFailed { ref field, .. } => {
            ErrorResponse::new(code, error.message())
                .with_details(serde_json::json!({ "field": field }))
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        DutyTypeError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Type request failed");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
