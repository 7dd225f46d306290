//! DeleteDutyHandler - Command handler for soft-deleting duties.

use std::sync::Arc;

use crate::domain::duty::{DutyDeleted, DutyError};
use crate::domain::foundation::DutyId;
use crate::ports::{DutyEventHandler, DutyRepository};

/// Command to delete a duty.
#[derive(Debug, Clone)]
pub struct DeleteDutyCommand {
    pub duty_id: DutyId,
}

/// Handler for deleting duties.
///
/// Deletion is soft: the duty is flagged and written back through the
/// regular update path, so its row and audit trail stay in storage.
pub struct DeleteDutyHandler {
    duties: Arc<dyn DutyRepository>,
    events: Arc<dyn DutyEventHandler>,
}

impl DeleteDutyHandler {
    pub fn new(duties: Arc<dyn DutyRepository>, events: Arc<dyn DutyEventHandler>) -> Self {
        Self { duties, events }
    }

    pub async fn handle(&self, cmd: DeleteDutyCommand) -> Result<(), DutyError> {
        // 1. Load the duty; already-deleted duties are not found
        let mut duty = self
            .duties
            .find_by_id(&cmd.duty_id)
            .await?
            .ok_or_else(|| DutyError::not_found(cmd.duty_id))?;

        // 2. Flag and persist
        duty.mark_deleted();
        self.duties.update(&duty).await?;

        // 3. Audit
        self.events
            .handle_duty_deleted(&DutyDeleted::from_duty(&duty))
            .await?;

        tracing::info!(duty_id = %duty.id(), "Duty deleted");

        Ok(())
    }
}
