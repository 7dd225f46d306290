//! PostgreSQL implementation of DutyRepository.
//!
//! Duties reference their type by `type_id`; reads join `types` so the
//! aggregate comes back with the type embedded. Every read filters
//! `deleted = FALSE`. Lists order by `created_at DESC, seq DESC`, so rows
//! with equal timestamps come back latest insert first.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::duty::Duty;
use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DomainError, DutyId, DutyTypeId, ErrorCode, Timestamp};
use crate::ports::{DutyPage, DutyRepository, PageRequest};

const SELECT_DUTY: &str = r#"
    SELECT d.id, d.name, d.description, d.completed, d.deleted,
           d.created_at, d.updated_at,
           t.id AS type_id, t.name AS type_name
    FROM duties d
    JOIN types t ON t.id = d.type_id
"#;

/// PostgreSQL implementation of DutyRepository.
#[derive(Clone)]
pub struct PostgresDutyRepository {
    pool: PgPool,
}

impl PostgresDutyRepository {
    /// Creates a new PostgresDutyRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DutyRepository for PostgresDutyRepository {
    async fn save(&self, duty: &Duty) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO duties (
                id, name, description, completed, deleted, type_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(duty.id().as_uuid())
        .bind(duty.name())
        .bind(duty.description())
        .bind(duty.is_completed())
        .bind(duty.is_deleted())
        .bind(duty.duty_type().id().as_str())
        .bind(duty.created_at().as_datetime())
        .bind(duty.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert duty", e))?;

        Ok(())
    }

    async fn update(&self, duty: &Duty) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE duties SET
                name = $2,
                description = $3,
                completed = $4,
                deleted = $5,
                type_id = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(duty.id().as_uuid())
        .bind(duty.name())
        .bind(duty.description())
        .bind(duty.is_completed())
        .bind(duty.is_deleted())
        .bind(duty.duty_type().id().as_str())
        .bind(duty.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update duty", e))?;

        if result.rows_affected() == 0 {
            return Err(duty_not_found(duty.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DutyId) -> Result<Option<Duty>, DomainError> {
        let sql = format!("{} WHERE d.id = $1 AND d.deleted = FALSE", SELECT_DUTY);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch duty", e))?;

        row.map(row_to_duty).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Duty>, DomainError> {
        let sql = format!(
            "{} WHERE d.deleted = FALSE ORDER BY d.created_at DESC, d.seq DESC",
            SELECT_DUTY
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch duties", e))?;

        rows.into_iter().map(row_to_duty).collect()
    }

    async fn find_all_paginated(&self, page: &PageRequest) -> Result<DutyPage, DomainError> {
        let sql = format!(
            "{} WHERE d.deleted = FALSE ORDER BY d.created_at DESC, d.seq DESC LIMIT $1 OFFSET $2",
            SELECT_DUTY
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(page.limit))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch duty page", e))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM duties WHERE deleted = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count duties", e))?;

        let items = rows
            .into_iter()
            .map(row_to_duty)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DutyPage {
            items,
            total: total.0.max(0) as u64,
        })
    }

    async fn delete(&self, id: &DutyId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE duties SET
                deleted = TRUE,
                updated_at = GREATEST(updated_at, NOW())
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to delete duty", e))?;

        if result.rows_affected() == 0 {
            return Err(duty_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn duty_not_found(id: &DutyId) -> DomainError {
    DomainError::new(ErrorCode::DutyNotFound, format!("Duty not found: {}", id))
        .with_detail("duty_id", id.to_string())
}

fn row_to_duty(row: sqlx::postgres::PgRow) -> Result<Duty, DomainError> {
    let column = |name: &str, e: sqlx::Error| {
        DomainError::database(&format!("Failed to get {}", name), e)
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| column("id", e))?;
    let name: String = row.try_get("name").map_err(|e| column("name", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| column("description", e))?;
    let completed: bool = row.try_get("completed").map_err(|e| column("completed", e))?;
    let deleted: bool = row.try_get("deleted").map_err(|e| column("deleted", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column("updated_at", e))?;
    let type_id: String = row.try_get("type_id").map_err(|e| column("type_id", e))?;
    let type_name: String = row.try_get("type_name").map_err(|e| column("type_name", e))?;

    let type_id = DutyTypeId::new(type_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid type_id: {}", e))
    })?;

    Ok(Duty::reconstitute(
        DutyId::from_uuid(id),
        name,
        description,
        completed,
        DutyType::reconstitute(type_id, type_name),
        deleted,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
