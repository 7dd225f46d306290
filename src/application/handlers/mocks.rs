//! Hand-written port mocks shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::duty::{Duty, DutyCreated, DutyDeleted, DutyLog, DutyUpdated};
use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DomainError, DutyId, DutyTypeId, ErrorCode};
use crate::ports::{
    DutyEventHandler, DutyLogRepository, DutyPage, DutyRepository, DutyTypeRepository,
    PageRequest,
};

fn simulated_failure(what: &str) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Simulated {} failure", what))
}

// ════════════════════════════════════════════════════════════════════════════
// Duty repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockDutyRepository {
    duties: Mutex<Vec<Duty>>,
    fail_writes: bool,
    update_calls: Mutex<u32>,
}

impl MockDutyRepository {
    pub fn new() -> Self {
        Self {
            duties: Mutex::new(Vec::new()),
            fail_writes: false,
            update_calls: Mutex::new(0),
        }
    }

    pub fn with_duty(duty: Duty) -> Self {
        let repo = Self::new();
        repo.duties.lock().unwrap().push(duty);
        repo
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// Every stored duty, deleted ones included.
    pub fn stored(&self) -> Vec<Duty> {
        self.duties.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> u32 {
        *self.update_calls.lock().unwrap()
    }

    fn live(&self) -> Vec<Duty> {
        let mut live: Vec<Duty> = self
            .duties
            .lock()
            .unwrap()
            .iter()
            .filter(|d| !d.is_deleted())
            .cloned()
            .collect();
        live.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        live
    }
}

#[async_trait]
impl DutyRepository for MockDutyRepository {
    async fn save(&self, duty: &Duty) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(simulated_failure("save"));
        }
        self.duties.lock().unwrap().push(duty.clone());
        Ok(())
    }

    async fn update(&self, duty: &Duty) -> Result<(), DomainError> {
        *self.update_calls.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(simulated_failure("update"));
        }
        let mut duties = self.duties.lock().unwrap();
        match duties.iter_mut().find(|d| d.id() == duty.id()) {
            Some(existing) => {
                *existing = duty.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::DutyNotFound, "Duty not found")
                .with_detail("duty_id", duty.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &DutyId) -> Result<Option<Duty>, DomainError> {
        Ok(self.live().into_iter().find(|d| d.id() == id))
    }

    async fn find_all(&self) -> Result<Vec<Duty>, DomainError> {
        Ok(self.live())
    }

    async fn find_all_paginated(&self, page: &PageRequest) -> Result<DutyPage, DomainError> {
        let live = self.live();
        let total = live.len() as u64;
        let items = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok(DutyPage { items, total })
    }

    async fn delete(&self, id: &DutyId) -> Result<(), DomainError> {
        let mut duty = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::DutyNotFound, "Duty not found"))?;
        duty.mark_deleted();
        self.update(&duty).await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Duty type repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockDutyTypeRepository {
    types: Mutex<Vec<DutyType>>,
    fail_writes: bool,
}

impl MockDutyTypeRepository {
    pub fn new() -> Self {
        Self {
            types: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn with_types(types: Vec<DutyType>) -> Self {
        Self {
            types: Mutex::new(types),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            types: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn stored(&self) -> Vec<DutyType> {
        self.types.lock().unwrap().clone()
    }
}

#[async_trait]
impl DutyTypeRepository for MockDutyTypeRepository {
    async fn save(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(simulated_failure("save"));
        }
        self.types.lock().unwrap().push(duty_type.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DutyTypeId) -> Result<Option<DutyType>, DomainError> {
        Ok(self
            .types
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<DutyType>, DomainError> {
        let mut types = self.stored();
        types.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(types)
    }

    async fn update(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(simulated_failure("update"));
        }
        let mut types = self.types.lock().unwrap();
        match types.iter_mut().find(|t| t.id() == duty_type.id()) {
            Some(existing) => {
                *existing = duty_type.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::DutyTypeNotFound, "Type not found")
                .with_detail("type_id", duty_type.id().to_string())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Duty log repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockDutyLogRepository {
    logs: Mutex<Vec<DutyLog>>,
    fail_writes: bool,
}

impl MockDutyLogRepository {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn with_logs(logs: Vec<DutyLog>) -> Self {
        Self {
            logs: Mutex::new(logs),
            fail_writes: false,
        }
    }

    pub fn stored(&self) -> Vec<DutyLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl DutyLogRepository for MockDutyLogRepository {
    async fn save(&self, log: &DutyLog) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(simulated_failure("log save"));
        }
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn find_by_duty_id(&self, duty_id: &DutyId) -> Result<Vec<DutyLog>, DomainError> {
        let mut logs: Vec<DutyLog> = self
            .stored()
            .into_iter()
            .filter(|l| l.duty_id() == duty_id)
            .collect();
        logs.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(logs)
    }

    async fn find_all(&self) -> Result<Vec<DutyLog>, DomainError> {
        let mut logs = self.stored();
        logs.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(logs)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Event handler
// ════════════════════════════════════════════════════════════════════════════

/// Records which lifecycle events were delivered.
pub struct RecordingEventHandler {
    events: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Delivered events as `"<kind>:<duty_id>"`.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, kind: &str, duty_id: &DutyId) -> Result<(), DomainError> {
        if self.fail {
            return Err(simulated_failure("event handler"));
        }
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:{}", kind, duty_id));
        Ok(())
    }
}

#[async_trait]
impl DutyEventHandler for RecordingEventHandler {
    async fn handle_duty_created(&self, event: &DutyCreated) -> Result<(), DomainError> {
        self.record("created", &event.duty_id)
    }

    async fn handle_duty_updated(&self, event: &DutyUpdated) -> Result<(), DomainError> {
        self.record("updated", &event.duty_id)
    }

    async fn handle_duty_deleted(&self, event: &DutyDeleted) -> Result<(), DomainError> {
        self.record("deleted", &event.duty_id)
    }
}

pub fn work_type() -> DutyType {
    DutyType::reconstitute(DutyTypeId::new("t1").unwrap(), "Work".to_string())
}

pub fn home_type() -> DutyType {
    DutyType::reconstitute(DutyTypeId::new("t2").unwrap(), "Home".to_string())
}
