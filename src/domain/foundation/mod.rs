//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event primitives, and error types
//! shared by the duty and type modules.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventId};
pub use ids::{DutyId, DutyLogId, DutyTypeId};
pub use timestamp::Timestamp;
