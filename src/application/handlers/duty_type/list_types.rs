//! ListTypesHandler - Query handler for all duty types.

use std::sync::Arc;

use crate::application::views::DutyTypeView;
use crate::domain::duty_type::DutyTypeError;
use crate::ports::DutyTypeRepository;

/// Query for every type, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct ListTypesQuery;

/// Handler for listing types.
pub struct ListTypesHandler {
    types: Arc<dyn DutyTypeRepository>,
}

impl ListTypesHandler {
    pub fn new(types: Arc<dyn DutyTypeRepository>) -> Self {
        Self { types }
    }

    pub async fn handle(&self, _query: ListTypesQuery) -> Result<Vec<DutyTypeView>, DutyTypeError> {
        let types = self.types.find_all().await?;
        Ok(types.iter().map(DutyTypeView::from).collect())
    }
}
