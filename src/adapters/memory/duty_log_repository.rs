//! In-memory audit log.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::duty::DutyLog;
use crate::domain::foundation::{DomainError, DutyId};
use crate::ports::DutyLogRepository;

/// In-memory storage for audit entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDutyLogRepository {
    logs: Arc<RwLock<Vec<DutyLog>>>,
}

impl InMemoryDutyLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries newest first; ties keep the later append first.
    async fn newest_first(&self, filter: impl Fn(&DutyLog) -> bool) -> Vec<DutyLog> {
        let mut logs: Vec<DutyLog> = self
            .logs
            .read()
            .await
            .iter()
            .rev()
            .filter(|l| filter(l))
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        logs
    }
}

#[async_trait]
impl DutyLogRepository for InMemoryDutyLogRepository {
    async fn save(&self, log: &DutyLog) -> Result<(), DomainError> {
        self.logs.write().await.push(log.clone());
        Ok(())
    }

    async fn find_by_duty_id(&self, duty_id: &DutyId) -> Result<Vec<DutyLog>, DomainError> {
        Ok(self.newest_first(|l| l.duty_id() == duty_id).await)
    }

    async fn find_all(&self) -> Result<Vec<DutyLog>, DomainError> {
        Ok(self.newest_first(|_| true).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::duty::DutyAction;
    use crate::domain::foundation::{DutyLogId, Timestamp};

    #[tokio::test]
    async fn entries_filter_by_duty_and_come_newest_first() {
        let repo = InMemoryDutyLogRepository::new();
        let duty_id = DutyId::new();
        repo.save(&DutyLog::new(duty_id, DutyAction::Created, "c"))
            .await
            .unwrap();
        repo.save(&DutyLog::new(DutyId::new(), DutyAction::Created, "other"))
            .await
            .unwrap();
        repo.save(&DutyLog::new(duty_id, DutyAction::Updated, "u"))
            .await
            .unwrap();

        let actions: Vec<DutyAction> = repo
            .find_by_duty_id(&duty_id)
            .await
            .unwrap()
            .iter()
            .map(|l| l.action())
            .collect();
        assert_eq!(actions, vec![DutyAction::Updated, DutyAction::Created]);
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn equal_timestamps_return_latest_append_first() {
        let repo = InMemoryDutyLogRepository::new();
        let duty_id = DutyId::new();
        let at = Timestamp::now();
        for (action, details) in [(DutyAction::Created, "c"), (DutyAction::Updated, "u")] {
            repo.save(&DutyLog::reconstitute(
                DutyLogId::new(),
                duty_id,
                action,
                details.to_string(),
                at,
            ))
            .await
            .unwrap();
        }

        let logs = repo.find_by_duty_id(&duty_id).await.unwrap();
        assert_eq!(logs[0].action(), DutyAction::Updated);
        assert_eq!(logs[1].action(), DutyAction::Created);
    }
}
