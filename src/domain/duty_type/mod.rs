//! Duty type module.
//!
//! A type is a named category that every duty belongs to. Types are
//! created and renamed explicitly and are never deleted.

mod aggregate;
mod errors;

pub use aggregate::DutyType;
pub use errors::DutyTypeError;
