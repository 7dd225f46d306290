//! In-memory duty store.
//!
//! Rows are kept in insertion order. Reads skip deleted duties and embed
//! the current version of each duty's type, matching the join done by the
//! PostgreSQL adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::InMemoryDutyTypeRepository;
use crate::domain::duty::Duty;
use crate::domain::foundation::{DomainError, DutyId, ErrorCode};
use crate::ports::{DutyPage, DutyRepository, DutyTypeRepository, PageRequest};

/// In-memory storage for duties.
#[derive(Debug, Clone)]
pub struct InMemoryDutyRepository {
    duties: Arc<RwLock<Vec<Duty>>>,
    types: InMemoryDutyTypeRepository,
}

impl InMemoryDutyRepository {
    /// Create a store that resolves types from `types`.
    pub fn new(types: InMemoryDutyTypeRepository) -> Self {
        Self {
            duties: Arc::new(RwLock::new(Vec::new())),
            types,
        }
    }

    /// Every stored row, deleted ones included.
    pub async fn raw_rows(&self) -> Vec<Duty> {
        self.duties.read().await.clone()
    }

    /// Live duties, newest first; ties keep the later insert first.
    async fn live(&self) -> Result<Vec<Duty>, DomainError> {
        let rows: Vec<Duty> = self
            .duties
            .read()
            .await
            .iter()
            .rev()
            .filter(|d| !d.is_deleted())
            .cloned()
            .collect();

        let mut live = Vec::with_capacity(rows.len());
        for duty in rows {
            live.push(self.with_current_type(duty).await?);
        }
        live.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(live)
    }

    async fn with_current_type(&self, duty: Duty) -> Result<Duty, DomainError> {
        match self.types.find_by_id(duty.duty_type().id()).await? {
            Some(current) if current != *duty.duty_type() => Ok(Duty::reconstitute(
                *duty.id(),
                duty.name().to_string(),
                duty.description().to_string(),
                duty.is_completed(),
                current,
                duty.is_deleted(),
                *duty.created_at(),
                *duty.updated_at(),
            )),
            _ => Ok(duty),
        }
    }
}

#[async_trait]
impl DutyRepository for InMemoryDutyRepository {
    async fn save(&self, duty: &Duty) -> Result<(), DomainError> {
        let mut duties = self.duties.write().await;
        if duties.iter().any(|d| d.id() == duty.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Duty already exists: {}", duty.id()),
            ));
        }
        duties.push(duty.clone());
        Ok(())
    }

    async fn update(&self, duty: &Duty) -> Result<(), DomainError> {
        let mut duties = self.duties.write().await;
        match duties.iter_mut().find(|d| d.id() == duty.id()) {
            Some(existing) => {
                *existing = duty.clone();
                Ok(())
            }
            None => Err(duty_not_found(duty.id())),
        }
    }

    async fn find_by_id(&self, id: &DutyId) -> Result<Option<Duty>, DomainError> {
        let found = self
            .duties
            .read()
            .await
            .iter()
            .find(|d| d.id() == id && !d.is_deleted())
            .cloned();

        match found {
            Some(duty) => Ok(Some(self.with_current_type(duty).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Duty>, DomainError> {
        self.live().await
    }

    async fn find_all_paginated(&self, page: &PageRequest) -> Result<DutyPage, DomainError> {
        let live = self.live().await?;
        let total = live.len() as u64;
        let items = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok(DutyPage { items, total })
    }

    async fn delete(&self, id: &DutyId) -> Result<(), DomainError> {
        let mut duties = self.duties.write().await;
        match duties.iter_mut().find(|d| d.id() == id && !d.is_deleted()) {
            Some(duty) => {
                duty.mark_deleted();
                Ok(())
            }
            None => Err(duty_not_found(id)),
        }
    }
}

fn duty_not_found(id: &DutyId) -> DomainError {
    DomainError::new(ErrorCode::DutyNotFound, format!("Duty not found: {}", id))
        .with_detail("duty_id", id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::duty_type::DutyType;
    use crate::domain::foundation::{DutyTypeId, Timestamp};
    use chrono::{Duration, Utc};

    fn work() -> DutyType {
        DutyType::reconstitute(DutyTypeId::new("t1").unwrap(), "Work".to_string())
    }

    fn setup() -> (InMemoryDutyTypeRepository, InMemoryDutyRepository) {
        let types = InMemoryDutyTypeRepository::with_types([work()]);
        let duties = InMemoryDutyRepository::new(types.clone());
        (types, duties)
    }

    fn duty_created_minutes_ago(name: &str, minutes: i64) -> Duty {
        let at = Timestamp::from_datetime(Utc::now() - Duration::minutes(minutes));
        Duty::reconstitute(
            DutyId::new(),
            name.to_string(),
            String::new(),
            false,
            work(),
            false,
            at,
            at,
        )
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let (_, repo) = setup();
        let duty = Duty::create("Test", "desc", work());
        repo.save(&duty).await.unwrap();

        assert_eq!(repo.find_by_id(duty.id()).await.unwrap(), Some(duty));
    }

    #[tokio::test]
    async fn deleted_duty_is_hidden_but_kept() {
        let (_, repo) = setup();
        let duty = Duty::create("Test", "desc", work());
        repo.save(&duty).await.unwrap();

        repo.delete(duty.id()).await.unwrap();

        assert!(repo.find_by_id(duty.id()).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
        let rows = repo.raw_rows().await;
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_deleted());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let (_, repo) = setup();
        let duty = Duty::create("Test", "desc", work());
        repo.save(&duty).await.unwrap();
        repo.delete(duty.id()).await.unwrap();

        let err = repo.delete(duty.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DutyNotFound);
    }

    #[tokio::test]
    async fn update_unknown_duty_is_not_found() {
        let (_, repo) = setup();
        let err = repo
            .update(&Duty::create("x", "", work()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DutyNotFound);
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let (_, repo) = setup();
        repo.save(&duty_created_minutes_ago("old", 30)).await.unwrap();
        repo.save(&duty_created_minutes_ago("new", 1)).await.unwrap();
        repo.save(&duty_created_minutes_ago("mid", 10)).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn pagination_slices_and_counts_live_rows() {
        let (_, repo) = setup();
        for i in 0..7 {
            repo.save(&duty_created_minutes_ago(&format!("d{}", i), i))
                .await
                .unwrap();
        }
        let victim = repo.find_all().await.unwrap()[0].clone();
        repo.delete(victim.id()).await.unwrap();

        let page = repo
            .find_all_paginated(&PageRequest::new(2, 4))
            .await
            .unwrap();

        assert_eq!(page.total, 6);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn reads_embed_renamed_type() {
        let (types, repo) = setup();
        let duty = Duty::create("Test", "desc", work());
        repo.save(&duty).await.unwrap();

        let mut renamed = work();
        renamed.rename("Office").unwrap();
        types.update(&renamed).await.unwrap();

        let found = repo.find_by_id(duty.id()).await.unwrap().unwrap();
        assert_eq!(found.duty_type().name(), "Office");
    }
}
