//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them into the application.

pub mod duty;
pub mod duty_type;
pub mod error;
pub mod middleware;
mod router;

pub use error::ErrorResponse;
pub use router::{api_routes, app_router, AppState};
