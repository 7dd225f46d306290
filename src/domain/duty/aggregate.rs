//! Duty aggregate entity.
//!
//! A duty embeds its type by value. The type reference is validated by the
//! command layer before any duty is built or changed.

use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DutyId, Timestamp};
use serde::{Deserialize, Serialize};

/// Duty aggregate - a single task record.
///
/// # Invariants
///
/// - `id` is assigned at creation and never changes
/// - `created_at` never changes after creation
/// - `updated_at` never moves backwards
/// - Deleted duties are hidden from every read path but stay persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    id: DutyId,
    name: String,
    description: String,
    completed: bool,
    duty_type: DutyType,
    deleted: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Duty {
    /// Create a new, open duty with a fresh id.
    pub fn create(name: impl Into<String>, description: impl Into<String>, duty_type: DutyType) -> Self {
        let now = Timestamp::now();
        Self {
            id: DutyId::new(),
            name: name.into(),
            description: description.into(),
            completed: false,
            duty_type,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a duty from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DutyId,
        name: String,
        description: String,
        completed: bool,
        duty_type: DutyType,
        deleted: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            completed,
            duty_type,
            deleted,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the duty ID.
    pub fn id(&self) -> &DutyId {
        &self.id
    }

    /// Returns the duty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the duty description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the duty is done.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the embedded type.
    pub fn duty_type(&self) -> &DutyType {
        &self.duty_type
    }

    /// Returns true if the duty has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns when the duty was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the duty was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the duty as done.
    pub fn complete(&mut self) {
        self.completed = true;
        self.touch();
    }

    /// Reopens a completed duty.
    pub fn uncomplete(&mut self) {
        self.completed = false;
        self.touch();
    }

    /// Replaces the editable fields.
    ///
    /// `completed` keeps its current value when `None`.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        duty_type: DutyType,
        completed: Option<bool>,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.duty_type = duty_type;
        if let Some(completed) = completed {
            self.completed = completed;
        }
        self.touch();
    }

    /// Soft-deletes the duty.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now_after(&self.updated_at);
    }
}
