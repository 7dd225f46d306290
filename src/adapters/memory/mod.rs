//! In-memory adapters for the storage ports.
//!
//! Used by tests and when the service runs with `storage = memory`.
//! Clones share the same underlying maps.

mod duty_log_repository;
mod duty_repository;
mod duty_type_repository;

pub use duty_log_repository::InMemoryDutyLogRepository;
pub use duty_repository::InMemoryDutyRepository;
pub use duty_type_repository::InMemoryDutyTypeRepository;
