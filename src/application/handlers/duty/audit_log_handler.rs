//! AuditLogHandler - Writes one audit entry per duty lifecycle event.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::duty::{DutyAction, DutyCreated, DutyDeleted, DutyLog, DutyUpdated};
use crate::domain::foundation::{DomainError, DomainEvent, DutyId};
use crate::ports::{DutyEventHandler, DutyLogRepository};

/// Event handler that appends audit entries.
pub struct AuditLogHandler {
    logs: Arc<dyn DutyLogRepository>,
}

impl AuditLogHandler {
    pub fn new(logs: Arc<dyn DutyLogRepository>) -> Self {
        Self { logs }
    }

    async fn append(
        &self,
        event: &dyn DomainEvent,
        duty_id: DutyId,
        action: DutyAction,
        details: String,
    ) -> Result<(), DomainError> {
        let log = DutyLog::for_event(event, duty_id, action, details);
        self.logs.save(&log).await?;
        tracing::debug!(
            event_id = %event.event_id(),
            event_type = event.event_type(),
            aggregate_type = event.aggregate_type(),
            aggregate_id = %event.aggregate_id(),
            action = %action,
            "Audit entry written"
        );
        Ok(())
    }
}

#[async_trait]
impl DutyEventHandler for AuditLogHandler {
    async fn handle_duty_created(&self, event: &DutyCreated) -> Result<(), DomainError> {
        self.append(
            event,
            event.duty_id,
            DutyAction::Created,
            format!("Duty \"{}\" was created", event.name),
        )
        .await
    }

    async fn handle_duty_updated(&self, event: &DutyUpdated) -> Result<(), DomainError> {
        self.append(
            event,
            event.duty_id,
            DutyAction::Updated,
            format!("Duty \"{}\" was updated", event.name),
        )
        .await
    }

    async fn handle_duty_deleted(&self, event: &DutyDeleted) -> Result<(), DomainError> {
        self.append(
            event,
            event.duty_id,
            DutyAction::Deleted,
            format!("Duty with ID \"{}\" was deleted", event.duty_id),
        )
        .await
    }
}
