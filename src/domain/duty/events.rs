//! Duty domain events.
//!
//! Events raised by duty commands once the change is persisted:
//! - `DutyCreated` - New duty stored
//! - `DutyUpdated` - Duty fields replaced
//! - `DutyDeleted` - Duty soft-deleted

use serde::{Deserialize, Serialize};

use super::Duty;
use crate::domain::foundation::{domain_event, DutyId, EventId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// DutyCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new duty has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyCreated {
    pub event_id: EventId,
    pub duty_id: DutyId,
    pub name: String,
    pub created_at: Timestamp,
}

impl DutyCreated {
    pub fn from_duty(duty: &Duty) -> Self {
        Self {
            event_id: EventId::new(),
            duty_id: *duty.id(),
            name: duty.name().to_string(),
            created_at: *duty.created_at(),
        }
    }
}

domain_event!(
    DutyCreated,
    event_type = "duty.created.v1",
    aggregate_id = duty_id,
    aggregate_type = "Duty",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// DutyUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a duty's fields have been replaced.
///
/// Carries the name after the update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyUpdated {
    pub event_id: EventId,
    pub duty_id: DutyId,
    pub name: String,
    pub updated_at: Timestamp,
}

impl DutyUpdated {
    pub fn from_duty(duty: &Duty) -> Self {
        Self {
            event_id: EventId::new(),
            duty_id: *duty.id(),
            name: duty.name().to_string(),
            updated_at: *duty.updated_at(),
        }
    }
}

domain_event!(
    DutyUpdated,
    event_type = "duty.updated.v1",
    aggregate_id = duty_id,
    aggregate_type = "Duty",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// DutyDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when a duty has been soft-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyDeleted {
    pub event_id: EventId,
    pub duty_id: DutyId,
    pub deleted_at: Timestamp,
}

impl DutyDeleted {
    pub fn from_duty(duty: &Duty) -> Self {
        Self {
            event_id: EventId::new(),
            duty_id: *duty.id(),
            deleted_at: *duty.updated_at(),
        }
    }
}

domain_event!(
    DutyDeleted,
    event_type = "duty.deleted.v1",
    aggregate_id = duty_id,
    aggregate_type = "Duty",
    occurred_at = deleted_at,
    event_id = event_id
);
