//! Duty type entity.

use crate::domain::foundation::{DomainError, DutyTypeId};
use serde::{Deserialize, Serialize};

/// A named category for duties.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyType {
    id: DutyTypeId,
    name: String,
}

impl DutyType {
    /// Creates a type with a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            id: DutyTypeId::generate(),
            name,
        })
    }

    /// Reconstitute a type from persistence (no validation).
    pub fn reconstitute(id: DutyTypeId, name: String) -> Self {
        Self { id, name }
    }

    /// Returns the type ID.
    pub fn id(&self) -> &DutyTypeId {
        &self.id
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Type name cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn new_type_gets_generated_id() {
        let a = DutyType::new("Work").unwrap();
        let b = DutyType::new("Work").unwrap();
        assert_eq!(a.name(), "Work");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_type_rejects_blank_name() {
        let err = DutyType::new("  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn rename_keeps_id() {
        let mut t = DutyType::reconstitute(DutyTypeId::new("t1").unwrap(), "Work".into());
        t.rename("Chores").unwrap();
        assert_eq!(t.id().as_str(), "t1");
        assert_eq!(t.name(), "Chores");
    }

    #[test]
    fn rename_rejects_empty_name_and_keeps_old() {
        let mut t = DutyType::reconstitute(DutyTypeId::new("t1").unwrap(), "Work".into());
        assert!(t.rename("").is_err());
        assert_eq!(t.name(), "Work");
    }
}
