//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresDutyRepository` - Duties, joined with their type on read
//! - `PostgresDutyTypeRepository` - Duty types
//! - `PostgresDutyLogRepository` - Append-only audit log
//!
//! Pool construction and migrations live in `pool`.

mod duty_log_repository;
mod duty_repository;
mod duty_type_repository;
mod pool;

pub use duty_log_repository::PostgresDutyLogRepository;
pub use duty_repository::PostgresDutyRepository;
pub use duty_type_repository::PostgresDutyTypeRepository;
pub use pool::{connect, run_migrations};
