//! GetDutyLogsHandler - Query handler for a duty's audit trail.

use std::sync::Arc;

use crate::application::views::DutyLogView;
use crate::domain::duty::DutyError;
use crate::domain::foundation::DutyId;
use crate::ports::DutyLogRepository;

/// Query for the audit entries of one duty.
#[derive(Debug, Clone)]
pub struct GetDutyLogsQuery {
    pub duty_id: DutyId,
}

/// Handler for reading audit entries.
///
/// Works for deleted duties too; an unknown id yields an empty list.
pub struct GetDutyLogsHandler {
    logs: Arc<dyn DutyLogRepository>,
}

impl GetDutyLogsHandler {
    pub fn new(logs: Arc<dyn DutyLogRepository>) -> Self {
        Self { logs }
    }

    pub async fn handle(&self, query: GetDutyLogsQuery) -> Result<Vec<DutyLogView>, DutyError> {
        let logs = self.logs.find_by_duty_id(&query.duty_id).await?;
        Ok(logs.iter().map(DutyLogView::from).collect())
    }
}
