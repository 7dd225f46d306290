//! CreateDutyHandler - Command handler for creating new duties.

use std::sync::Arc;

use super::type_lookup::{resolve_type, TypeUse};
use crate::application::views::DutyView;
use crate::domain::duty::{Duty, DutyCreated, DutyError};
use crate::ports::{DutyEventHandler, DutyRepository, DutyTypeRepository};

/// Command to create a new duty.
#[derive(Debug, Clone)]
pub struct CreateDutyCommand {
    pub name: String,
    pub description: String,
    /// Raw type identifier; empty when the client sent none.
    pub type_id: String,
}

/// Handler for creating duties.
pub struct CreateDutyHandler {
    duties: Arc<dyn DutyRepository>,
    types: Arc<dyn DutyTypeRepository>,
    events: Arc<dyn DutyEventHandler>,
}

impl CreateDutyHandler {
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

    pub async fn handle(&self, cmd: CreateDutyCommand) -> Result<DutyView, DutyError> {
        // 1. Validate the type reference
        let duty_type = resolve_type(self.types.as_ref(), &cmd.type_id, TypeUse::Create).await?;

        // 2. Create and persist the duty
        let duty = Duty::create(cmd.name, cmd.description, duty_type);
        self.duties.save(&duty).await?;

        // 3. Audit
        self.events
            .handle_duty_created(&DutyCreated::from_duty(&duty))
            .await?;

        tracing::info!(
            duty_id = %duty.id(),
            type_id = %duty.duty_type().id(),
            "Duty created"
        );

        Ok(DutyView::from(&duty))
    }
}
