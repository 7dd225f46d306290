//! Duty Tracker - Task tracking backend.
//!
//! Duties belong to a type, are soft-deleted, and every change is recorded
//! in an append-only audit log. The crate is laid out hexagonally: domain
//! types, ports, application handlers, and adapters for HTTP and storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
