//! HTTP adapter for duty endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateDutyRequest, PaginationParams, TypeReference, UpdateDutyRequest};
pub use handlers::DutyHandlers;
pub use routes::duty_routes;
