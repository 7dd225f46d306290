//! Bearer authentication stub.
//!
//! Only the presence and shape of the `Authorization` header are checked;
//! any bearer token is accepted. The token is stored in request extensions
//! as `BearerToken` for handlers that want it.
//!
//! ```text
//! Authorization: Bearer <token>
//! ```

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

use crate::adapters::http::error::ErrorResponse;

/// The raw token from an accepted `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Rejects requests without a `Bearer` authorization header.
///
/// Use with `axum::middleware::from_fn`.
pub async fn require_bearer(mut request: Request, next: Next) -> Response {
    let header = match request.headers().get(axum::http::header::AUTHORIZATION) {
        Some(value) => value,
        None => {
            return ErrorResponse::unauthorized("No authorization header")
                .into_response_with(StatusCode::UNAUTHORIZED)
        }
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string());

    match token {
        Some(token) => {
            request.extensions_mut().insert(BearerToken(token));
            next.run(request).await
        }
        None => ErrorResponse::unauthorized("Invalid authorization header")
            .into_response_with(StatusCode::UNAUTHORIZED),
    }
}
