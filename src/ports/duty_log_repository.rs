//! Duty audit log port.
//!
//! Append-only: there is no update or delete.

use crate::domain::duty::DutyLog;
use crate::domain::foundation::{DomainError, DutyId};
use async_trait::async_trait;

/// Repository port for duty audit entries.
#[async_trait]
pub trait DutyLogRepository: Send + Sync {
    /// Append an entry.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, log: &DutyLog) -> Result<(), DomainError>;

    /// All entries for a duty, newest first, whether or not the duty is deleted.
    async fn find_by_duty_id(&self, duty_id: &DutyId) -> Result<Vec<DutyLog>, DomainError>;

    /// All entries, newest first.
    async fn find_all(&self) -> Result<Vec<DutyLog>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_log_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DutyLogRepository) {}
    }
}
