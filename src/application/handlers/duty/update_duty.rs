//! UpdateDutyHandler - Command handler for replacing a duty's fields.

use std::sync::Arc;

use super::type_lookup::{resolve_type, TypeUse};
use crate::application::views::DutyView;
use crate::domain::duty::{DutyError, DutyUpdated};
use crate::domain::foundation::DutyId;
use crate::ports::{DutyEventHandler, DutyRepository, DutyTypeRepository};

/// Command to update a duty.
#[derive(Debug, Clone)]
pub struct UpdateDutyCommand {
    pub duty_id: DutyId,
    pub name: String,
    pub description: String,
    pub type_id: String,
    /// Keeps the current value when `None`.
    pub completed: Option<bool>,
}

/// Handler for updating duties.
pub struct UpdateDutyHandler {
    duties: Arc<dyn DutyRepository>,
    types: Arc<dyn DutyTypeRepository>,
    events: Arc<dyn DutyEventHandler>,
}

impl UpdateDutyHandler {
    pub fn new(
        duties: Arc<dyn DutyRepository>,
        types: Arc<dyn DutyTypeRepository>,
        events: Arc<dyn DutyEventHandler>,
    ) -> Self {
        Self {
            duties,
            types,
            events,
        }
    }

    pub async fn handle(&self, cmd: UpdateDutyCommand) -> Result<DutyView, DutyError> {
        // 1. Validate the type reference before touching the duty
        let duty_type = resolve_type(self.types.as_ref(), &cmd.type_id, TypeUse::Update).await?;

        // 2. Load the duty
        let mut duty = self
            .duties
            .find_by_id(&cmd.duty_id)
            .await?
            .ok_or_else(|| DutyError::not_found(cmd.duty_id))?;

        // 3. Replace fields and persist
        duty.apply_update(cmd.name, cmd.description, duty_type, cmd.completed);
        self.duties.update(&duty).await?;

        // 4. Audit
        self.events
            .handle_duty_updated(&DutyUpdated::from_duty(&duty))
            .await?;

        tracing::info!(
            duty_id = %duty.id(),
            type_id = %duty.duty_type().id(),
            completed = duty.is_completed(),
            "Duty updated"
        );

        Ok(DutyView::from(&duty))
    }
}
