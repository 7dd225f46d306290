//! HTTP middleware for axum.
//!
//! - `auth` - Bearer header check for `/api` routes

pub mod auth;

pub use auth::{require_bearer, BearerToken};
