//! In-memory duty type store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DomainError, DutyTypeId, ErrorCode};
use crate::ports::DutyTypeRepository;

/// In-memory storage for duty types.
#[derive(Debug, Clone)]
pub struct InMemoryDutyTypeRepository {
    types: Arc<RwLock<HashMap<DutyTypeId, DutyType>>>,
}

impl InMemoryDutyTypeRepository {
    pub fn new() -> Self {
        Self {
            types: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed with existing types.
    pub fn with_types(types: impl IntoIterator<Item = DutyType>) -> Self {
        let map = types
            .into_iter()
            .map(|t| (t.id().clone(), t))
            .collect::<HashMap<_, _>>();
        Self {
            types: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of stored types
    pub async fn count(&self) -> usize {
        self.types.read().await.len()
    }
}

impl Default for InMemoryDutyTypeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DutyTypeRepository for InMemoryDutyTypeRepository {
    async fn save(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        let mut types = self.types.write().await;
        if types.contains_key(duty_type.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Type already exists: {}", duty_type.id()),
            ));
        }
        types.insert(duty_type.id().clone(), duty_type.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DutyTypeId) -> Result<Option<DutyType>, DomainError> {
        Ok(self.types.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<DutyType>, DomainError> {
        let mut types: Vec<DutyType> = self.types.read().await.values().cloned().collect();
        types.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(types)
    }

    async fn update(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        let mut types = self.types.write().await;
        match types.get_mut(duty_type.id()) {
            Some(existing) => {
                *existing = duty_type.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DutyTypeNotFound,
                format!("Type not found: {}", duty_type.id()),
            )
            .with_detail("type_id", duty_type.id().to_string())),
        }
    }
}
