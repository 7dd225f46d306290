//! Duty lifecycle event handler port.
//!
//! Commands call the handler directly, after the triggering write succeeds
//! and before they return. There is no queue in between, so a failing
//! handler fails the command even though the duty change is already stored.

use crate::domain::duty::{DutyCreated, DutyDeleted, DutyUpdated};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Consumer of duty lifecycle events.
#[async_trait]
pub trait DutyEventHandler: Send + Sync {
    async fn handle_duty_created(&self, event: &DutyCreated) -> Result<(), DomainError>;

    async fn handle_duty_updated(&self, event: &DutyUpdated) -> Result<(), DomainError>;

    async fn handle_duty_deleted(&self, event: &DutyDeleted) -> Result<(), DomainError>;
}
