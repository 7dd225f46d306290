//! Duty command and query handlers.

mod audit_log_handler;
mod create_duty;
mod delete_duty;
mod get_duty;
mod get_duty_logs;
mod get_paginated_duties;
mod type_lookup;
mod update_duty;

pub use audit_log_handler::AuditLogHandler;
pub use create_duty::{CreateDutyCommand, CreateDutyHandler};
pub use delete_duty::{DeleteDutyCommand, DeleteDutyHandler};
pub use get_duty::{GetDutyHandler, GetDutyQuery};
pub use get_duty_logs::{GetDutyLogsHandler, GetDutyLogsQuery};
pub use get_paginated_duties::{
    GetPaginatedDutiesHandler, GetPaginatedDutiesQuery, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT,
};
pub use update_duty::{UpdateDutyCommand, UpdateDutyHandler};
