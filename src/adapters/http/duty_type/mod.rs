//! HTTP adapter for duty type endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::TypeRequest;
pub use handlers::DutyTypeHandlers;
pub use routes::duty_type_routes;
