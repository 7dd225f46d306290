//! Storage backend selection

use serde::Deserialize;

/// Which adapters back the storage ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx
    #[default]
    Postgres,
    /// Process-local maps; data is lost on restart
    Memory,
}

impl StorageBackend {
    /// Whether a database connection is needed
    pub fn requires_database(&self) -> bool {
        matches!(self, StorageBackend::Postgres)
    }
}
