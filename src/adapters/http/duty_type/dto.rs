//! HTTP DTOs for duty type endpoints.

use serde::Deserialize;

/// Body for creating or renaming a type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRequest {
    #[serde(default)]
    pub name: String,
}
