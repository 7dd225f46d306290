//! Duty repository port.
//!
//! Defines the contract for persisting and retrieving Duty aggregates.
//!
//! # Soft deletion
//!
//! Every read method excludes duties whose `deleted` flag is set. The filter
//! lives in the implementations' queries; callers never see deleted duties.

use crate::domain::duty::Duty;
use crate::domain::foundation::{DomainError, DutyId};
use async_trait::async_trait;

/// Repository port for Duty aggregate persistence.
#[async_trait]
pub trait DutyRepository: Send + Sync {
    /// Save a new duty.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, duty: &Duty) -> Result<(), DomainError>;

    /// Replace an existing duty, including its `deleted` flag.
    ///
    /// # Errors
    ///
    /// - `DutyNotFound` if the duty doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, duty: &Duty) -> Result<(), DomainError>;

    /// Find a non-deleted duty by its ID.
    ///
    /// Returns `None` if not found or soft-deleted.
    async fn find_by_id(&self, id: &DutyId) -> Result<Option<Duty>, DomainError>;

    /// Find all non-deleted duties, newest first.
    async fn find_all(&self) -> Result<Vec<Duty>, DomainError>;

    /// Find one page of non-deleted duties, newest first.
    ///
    /// `total` counts every non-deleted duty, not just the page.
    async fn find_all_paginated(&self, page: &PageRequest) -> Result<DutyPage, DomainError>;

    /// Soft-delete a duty: sets `deleted` and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// - `DutyNotFound` if the duty doesn't exist or is already deleted
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &DutyId) -> Result<(), DomainError>;
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Create a request for a page; `page` is clamped to at least 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of duties plus the total across all pages.
#[derive(Debug, Clone)]
pub struct DutyPage {
    pub items: Vec<Duty>,
    pub total: u64,
}
