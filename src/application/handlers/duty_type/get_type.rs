//! GetTypeHandler - Query handler for a single duty type.

use std::sync::Arc;

use crate::application::views::DutyTypeView;
use crate::domain::duty_type::DutyTypeError;
use crate::domain::foundation::DutyTypeId;
use crate::ports::DutyTypeRepository;

/// Query to get a type by ID.
#[derive(Debug, Clone)]
pub struct GetTypeQuery {
    pub type_id: DutyTypeId,
}

/// Handler for retrieving a type.
pub struct GetTypeHandler {
    types: Arc<dyn DutyTypeRepository>,
}

impl GetTypeHandler {
    pub fn new(types: Arc<dyn DutyTypeRepository>) -> Self {
        Self { types }
    }

    pub async fn handle(&self, query: GetTypeQuery) -> Result<DutyTypeView, DutyTypeError> {
        let duty_type = self
            .types
            .find_by_id(&query.type_id)
            .await?
            .ok_or_else(|| DutyTypeError::not_found(query.type_id))?;

        Ok(DutyTypeView::from(&duty_type))
    }
}
