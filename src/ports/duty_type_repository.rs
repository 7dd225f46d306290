//! Duty type repository port.

use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DomainError, DutyTypeId};
use async_trait::async_trait;

/// Repository port for duty types.
#[async_trait]
pub trait DutyTypeRepository: Send + Sync {
    /// Save a new type.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, duty_type: &DutyType) -> Result<(), DomainError>;

    /// Find a type by its ID.
    async fn find_by_id(&self, id: &DutyTypeId) -> Result<Option<DutyType>, DomainError>;

    /// Find all types ordered by name.
    async fn find_all(&self) -> Result<Vec<DutyType>, DomainError>;

    /// Replace the name of an existing type.
    ///
    /// # Errors
    ///
    /// - `DutyTypeNotFound` if the type doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, duty_type: &DutyType) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_type_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DutyTypeRepository) {}
    }
}
