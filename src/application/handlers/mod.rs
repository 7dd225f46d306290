//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod duty;
pub mod duty_type;

#[cfg(test)]
pub(crate) mod mocks;

pub use duty::{
    AuditLogHandler, CreateDutyCommand, CreateDutyHandler, DeleteDutyCommand, DeleteDutyHandler,
    GetDutyHandler, GetDutyLogsHandler, GetDutyLogsQuery, GetDutyQuery,
    GetPaginatedDutiesHandler, GetPaginatedDutiesQuery, UpdateDutyCommand, UpdateDutyHandler,
};
pub use duty_type::{
    CreateTypeCommand, CreateTypeHandler, GetTypeHandler, GetTypeQuery, ListTypesHandler,
    ListTypesQuery, UpdateTypeCommand, UpdateTypeHandler,
};
