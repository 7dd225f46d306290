//! Duty type command and query handlers.

mod create_type;
mod get_type;
mod list_types;
mod update_type;

pub use create_type::{CreateTypeCommand, CreateTypeHandler};
pub use get_type::{GetTypeHandler, GetTypeQuery};
pub use list_types::{ListTypesHandler, ListTypesQuery};
pub use update_type::{UpdateTypeCommand, UpdateTypeHandler};
