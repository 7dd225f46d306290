//! GetDutyHandler - Query handler for a single duty.

use std::sync::Arc;

use crate::application::views::DutyView;
use crate::domain::duty::DutyError;
use crate::domain::foundation::DutyId;
use crate::ports::DutyRepository;

/// Query to get a duty by ID.
#[derive(Debug, Clone)]
pub struct GetDutyQuery {
    pub duty_id: DutyId,
}

/// Handler for retrieving a duty.
pub struct GetDutyHandler {
    duties: Arc<dyn DutyRepository>,
}

impl GetDutyHandler {
    pub fn new(duties: Arc<dyn DutyRepository>) -> Self {
        Self { duties }
    }

    pub async fn handle(&self, query: GetDutyQuery) -> Result<DutyView, DutyError> {
        let duty = self
            .duties
            .find_by_id(&query.duty_id)
            .await?
            .ok_or_else(|| DutyError::not_found(query.duty_id))?;

        Ok(DutyView::from(&duty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mocks::{work_type, MockDutyRepository};
    use crate::domain::duty::Duty;

    #[tokio::test]
    async fn returns_existing_duty() {
        let duty = Duty::create("Test", "desc", work_type());
        let handler = GetDutyHandler::new(Arc::new(MockDutyRepository::with_duty(duty.clone())));

        let view = handler
            .handle(GetDutyQuery { duty_id: *duty.id() })
            .await
            .unwrap();

        assert_eq!(view, DutyView::from(&duty));
    }

    #[tokio::test]
    async fn deleted_duty_is_not_found() {
        let mut duty = Duty::create("Test", "desc", work_type());
        duty.mark_deleted();
        let handler = GetDutyHandler::new(Arc::new(MockDutyRepository::with_duty(duty.clone())));

        let err = handler
            .handle(GetDutyQuery { duty_id: *duty.id() })
            .await
            .unwrap_err();

        assert_eq!(err, DutyError::NotFound(*duty.id()));
    }
}
