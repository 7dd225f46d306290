//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Handlers return the serializable views defined in `views`.

pub mod handlers;
pub mod views;

pub use handlers::{
    // Duty handlers
    AuditLogHandler,
    CreateDutyCommand, CreateDutyHandler,
    DeleteDutyCommand, DeleteDutyHandler,
    GetDutyHandler, GetDutyQuery,
    GetDutyLogsHandler, GetDutyLogsQuery,
    GetPaginatedDutiesHandler, GetPaginatedDutiesQuery,
    UpdateDutyCommand, UpdateDutyHandler,
    // Type handlers
    CreateTypeCommand, CreateTypeHandler,
    GetTypeHandler, GetTypeQuery,
    ListTypesHandler, ListTypesQuery,
    UpdateTypeCommand, UpdateTypeHandler,
};
pub use views::{DutyLogView, DutyTypeView, DutyView, PaginatedDutiesView};
