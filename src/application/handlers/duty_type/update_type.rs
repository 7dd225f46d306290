//! UpdateTypeHandler - Command handler for renaming duty types.

use std::sync::Arc;

use crate::application::views::DutyTypeView;
use crate::domain::duty_type::DutyTypeError;
use crate::domain::foundation::DutyTypeId;
use crate::ports::DutyTypeRepository;

/// Command to rename a type.
#[derive(Debug, Clone)]
pub struct UpdateTypeCommand {
    pub type_id: DutyTypeId,
    pub name: String,
}

/// Handler for updating types.
///
/// Duties embed their type by value at read time, so a rename shows up on
/// every duty that references it.
pub struct UpdateTypeHandler {
    types: Arc<dyn DutyTypeRepository>,
}

impl UpdateTypeHandler {
    pub fn new(types: Arc<dyn DutyTypeRepository>) -> Self {
        Self { types }
    }

    pub async fn handle(&self, cmd: UpdateTypeCommand) -> Result<DutyTypeView, DutyTypeError> {
        // 1. Validate input
        if cmd.name.trim().is_empty() {
            return Err(DutyTypeError::validation(
                "name",
                "Name is required for updating a type",
            ));
        }

        // 2. Load
        let mut duty_type = self
            .types
            .find_by_id(&cmd.type_id)
            .await?
            .ok_or_else(|| DutyTypeError::not_found(cmd.type_id.clone()))?;

        // 3. Rename and persist
        duty_type.rename(cmd.name)?;
        self.types.update(&duty_type).await?;

        tracing::info!(type_id = %duty_type.id(), "Type updated");

        Ok(DutyTypeView::from(&duty_type))
    }
}
