//! Duty domain module.
//!
//! Handles the duty lifecycle: creation, field updates, completion and soft
//! deletion, plus the append-only audit log written for each change.
//!
//! # Events
//!
//! - `DutyCreated` - Published when a new duty is persisted
//! - `DutyUpdated` - Published when a duty's fields are replaced
//! - `DutyDeleted` - Published when a duty is soft-deleted

mod aggregate;
mod errors;
mod events;
mod log;

pub use aggregate::Duty;
pub use errors::DutyError;
pub use events::{DutyCreated, DutyDeleted, DutyUpdated};
pub use log::{DutyAction, DutyLog};
