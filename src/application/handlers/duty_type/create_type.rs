//! CreateTypeHandler - Command handler for creating duty types.

use std::sync::Arc;

use crate::application::views::DutyTypeView;
use crate::domain::duty_type::{DutyType, DutyTypeError};
use crate::ports::DutyTypeRepository;

/// Command to create a type.
#[derive(Debug, Clone)]
pub struct CreateTypeCommand {
    pub name: String,
}

/// Handler for creating types.
pub struct CreateTypeHandler {
    types: Arc<dyn DutyTypeRepository>,
}

impl CreateTypeHandler {
    pub fn new(types: Arc<dyn DutyTypeRepository>) -> Self {
        Self { types }
    }

    pub async fn handle(&self, cmd: CreateTypeCommand) -> Result<DutyTypeView, DutyTypeError> {
        if cmd.name.trim().is_empty() {
            return Err(DutyTypeError::validation(
                "name",
                "Name is required for creating a type",
            ));
        }

        let duty_type = DutyType::new(cmd.name)?;
        self.types.save(&duty_type).await?;

        tracing::info!(type_id = %duty_type.id(), "Type created");

        Ok(DutyTypeView::from(&duty_type))
    }
}
