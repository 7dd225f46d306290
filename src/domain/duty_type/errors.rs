//! Duty type error types.

use crate::domain::foundation::{DomainError, DutyTypeId, ErrorCode};

/// Errors returned by type commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DutyTypeError {
    /// Type was not found.
    NotFound(DutyTypeId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DutyTypeError {
    pub fn not_found(id: DutyTypeId) -> Self {
        DutyTypeError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DutyTypeError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DutyTypeError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DutyTypeError::NotFound(_) => ErrorCode::DutyTypeNotFound,
            DutyTypeError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DutyTypeError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DutyTypeError::NotFound(id) => format!("Type with id {} not found", id),
            DutyTypeError::ValidationFailed { message, .. } => message.clone(),
            DutyTypeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DutyTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DutyTypeError {}

impl From<DomainError> for DutyTypeError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                DutyTypeError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::DutyTypeNotFound => match err
                .details
                .get("type_id")
                .and_then(|id| DutyTypeId::new(id.as_str()).ok())
            {
                Some(id) => DutyTypeError::NotFound(id),
                None => DutyTypeError::Infrastructure(err.to_string()),
            },
            _ => DutyTypeError::Infrastructure(err.to_string()),
        }
    }
}
