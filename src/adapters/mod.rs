//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `postgres` - sqlx-backed storage
//! - `memory` - In-process storage for tests and database-less runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryDutyLogRepository, InMemoryDutyRepository, InMemoryDutyTypeRepository};
pub use postgres::{PostgresDutyLogRepository, PostgresDutyRepository, PostgresDutyTypeRepository};
