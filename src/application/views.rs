//! Read models returned by handlers and serialized by the HTTP layer.
//!
//! Field names serialize in camelCase (`createdAt`, `dutyId`, `totalPages`).

use serde::{Deserialize, Serialize};

use crate::domain::duty::{Duty, DutyAction, DutyLog};
use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DutyId, DutyLogId, Timestamp};

/// A duty type as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyTypeView {
    pub id: String,
    pub name: String,
}

impl From<&DutyType> for DutyTypeView {
    fn from(duty_type: &DutyType) -> Self {
        Self {
            id: duty_type.id().to_string(),
            name: duty_type.name().to_string(),
        }
    }
}

/// A duty with its type embedded.
///
/// The soft-delete flag is not exposed; deleted duties never reach a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyView {
    pub id: DutyId,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "type")]
    pub duty_type: DutyTypeView,
}

impl From<&Duty> for DutyView {
    fn from(duty: &Duty) -> Self {
        Self {
            id: *duty.id(),
            name: duty.name().to_string(),
            description: duty.description().to_string(),
            completed: duty.is_completed(),
            created_at: *duty.created_at(),
            updated_at: *duty.updated_at(),
            duty_type: DutyTypeView::from(duty.duty_type()),
        }
    }
}

/// One page of duties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDutiesView {
    pub duties: Vec<DutyView>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl PaginatedDutiesView {
    pub fn new(duties: &[Duty], total: u64, page: u32, limit: u32) -> Self {
        Self {
            duties: duties.iter().map(DutyView::from).collect(),
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

/// `ceil(total / limit)`; zero when `limit` is zero.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// An audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyLogView {
    pub id: DutyLogId,
    pub duty_id: DutyId,
    pub action: DutyAction,
    pub details: String,
    pub created_at: Timestamp,
}

impl From<&DutyLog> for DutyLogView {
    fn from(log: &DutyLog) -> Self {
        Self {
            id: *log.id(),
            duty_id: *log.duty_id(),
            action: log.action(),
            details: log.details().to_string(),
            created_at: *log.created_at(),
        }
    }
}
