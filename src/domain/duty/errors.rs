//! Duty-specific error types.

use crate::domain::foundation::{DomainError, DutyId, ErrorCode};

/// Errors returned by duty commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DutyError {
    /// Duty was not found or has been deleted.
    NotFound(DutyId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DutyError {
    pub fn not_found(id: DutyId) -> Self {
        DutyError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DutyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DutyError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DutyError::NotFound(_) => ErrorCode::DutyNotFound,
            DutyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DutyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DutyError::NotFound(id) => format!("Duty with id {} not found", id),
            DutyError::ValidationFailed { message, .. } => message.clone(),
            DutyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DutyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DutyError {}

impl From<DomainError> for DutyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                DutyError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::DutyNotFound => match err
                .details
                .get("duty_id")
                .and_then(|id| id.parse::<DutyId>().ok())
            {
                Some(id) => DutyError::NotFound(id),
                None => DutyError::Infrastructure(err.to_string()),
            },
            _ => DutyError::Infrastructure(err.to_string()),
        }
    }
}
