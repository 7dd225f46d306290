//! HTTP DTOs for duty endpoints.
//!
//! Responses are the application views; only request shapes live here.

use serde::Deserialize;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Type reference inside a duty body. Only `id` is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeReference {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to create a duty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDutyRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub duty_type: Option<TypeReference>,
}

impl CreateDutyRequest {
    /// Type id, empty when the body carried no type.
    pub fn type_id(&self) -> String {
        self.duty_type
            .as_ref()
            .map(|t| t.id.clone())
            .unwrap_or_default()
    }
}

/// Request to replace a duty.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDutyRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub duty_type: Option<TypeReference>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateDutyRequest {
    pub fn type_id(&self) -> String {
        self.duty_type
            .as_ref()
            .map(|t| t.id.clone())
            .unwrap_or_default()
    }
}

/// Query parameters for listing duties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_type_key() {
        let json = r#"{"name":"Test","description":"desc","type":{"id":"t1","name":"Work"}}"#;
        let req: CreateDutyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Test");
        assert_eq!(req.type_id(), "t1");
    }

    #[test]
    fn missing_type_is_empty_reference() {
        let req: CreateDutyRequest = serde_json::from_str(r#"{"name":"Test"}"#).unwrap();
        assert_eq!(req.type_id(), "");
        assert_eq!(req.description, "");
    }

    #[test]
    fn update_request_completed_is_optional() {
        let req: UpdateDutyRequest =
            serde_json::from_str(r#"{"name":"a","description":"b","type":{"id":"t1"}}"#).unwrap();
        assert!(req.completed.is_none());

        let req: UpdateDutyRequest = serde_json::from_str(
            r#"{"name":"a","description":"b","type":{"id":"t1"},"completed":true}"#,
        )
        .unwrap();
        assert_eq!(req.completed, Some(true));
    }
}
