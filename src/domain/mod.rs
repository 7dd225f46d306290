//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `duty` - Duty aggregate, lifecycle events and audit log entries
//! - `duty_type` - Duty categories

pub mod duty;
pub mod duty_type;
pub mod foundation;
