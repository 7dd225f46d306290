//! Duty audit log entries.

use crate::domain::foundation::{DomainEvent, DutyId, DutyLogId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DutyAction {
    Created,
    Updated,
    Deleted,
}

impl DutyAction {
    /// Returns the persisted form of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyAction::Created => "CREATED",
            DutyAction::Updated => "UPDATED",
            DutyAction::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for DutyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DutyAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(DutyAction::Created),
            "UPDATED" => Ok(DutyAction::Updated),
            "DELETED" => Ok(DutyAction::Deleted),
            other => Err(ValidationError::invalid_format(
                "action",
                format!("unknown action {}", other),
            )),
        }
    }
}

/// One append-only audit row for a duty.
///
/// Entries outlive the soft deletion of the duty they describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyLog {
    id: DutyLogId,
    duty_id: DutyId,
    action: DutyAction,
    details: String,
    created_at: Timestamp,
}

impl DutyLog {
    /// Creates a new entry stamped with the current time.
    pub fn new(duty_id: DutyId, action: DutyAction, details: impl Into<String>) -> Self {
        Self {
            id: DutyLogId::new(),
            duty_id,
            action,
            details: details.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates an entry for a lifecycle event, stamped when the event occurred.
    pub fn for_event(
        event: &dyn DomainEvent,
        duty_id: DutyId,
        action: DutyAction,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: DutyLogId::new(),
            duty_id,
            action,
            details: details.into(),
            created_at: event.occurred_at(),
        }
    }

    /// Reconstitute an entry from persistence.
    pub fn reconstitute(
        id: DutyLogId,
        duty_id: DutyId,
        action: DutyAction,
        details: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            duty_id,
            action,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> &DutyLogId {
        &self.id
    }

    pub fn duty_id(&self) -> &DutyId {
        &self.duty_id
    }

    pub fn action(&self) -> DutyAction {
        self.action
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
