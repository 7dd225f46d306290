//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DutyRepository` - Duty persistence with soft-delete filtering
//! - `DutyTypeRepository` - Duty type persistence
//! - `DutyLogRepository` - Append-only audit log
//!
//! ## Event Ports
//!
//! - `DutyEventHandler` - Synchronous consumer of duty lifecycle events

mod duty_event_handler;
mod duty_log_repository;
mod duty_repository;
mod duty_type_repository;

pub use duty_event_handler::DutyEventHandler;
pub use duty_log_repository::DutyLogRepository;
pub use duty_repository::{DutyPage, DutyRepository, PageRequest};
pub use duty_type_repository::DutyTypeRepository;
