//! PostgreSQL implementation of DutyTypeRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::duty_type::DutyType;
use crate::domain::foundation::{DomainError, DutyTypeId, ErrorCode};
use crate::ports::DutyTypeRepository;

/// PostgreSQL implementation of DutyTypeRepository.
#[derive(Clone)]
pub struct PostgresDutyTypeRepository {
    pool: PgPool,
}

impl PostgresDutyTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DutyTypeRepository for PostgresDutyTypeRepository {
    async fn save(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO types (id, name) VALUES ($1, $2)")
            .bind(duty_type.id().as_str())
            .bind(duty_type.name())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert type", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DutyTypeId) -> Result<Option<DutyType>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM types WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch type", e))?;

        row.map(row_to_type).transpose()
    }

    async fn find_all(&self) -> Result<Vec<DutyType>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM types ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch types", e))?;

        rows.into_iter().map(row_to_type).collect()
    }

    async fn update(&self, duty_type: &DutyType) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE types SET name = $2 WHERE id = $1")
            .bind(duty_type.id().as_str())
            .bind(duty_type.name())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to update type", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DutyTypeNotFound,
                format!("Type not found: {}", duty_type.id()),
            )
            .with_detail("type_id", duty_type.id().to_string()));
        }

        Ok(())
    }
}

fn row_to_type(row: sqlx::postgres::PgRow) -> Result<DutyType, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;

    let id = DutyTypeId::new(id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid type id: {}", e))
    })?;

    Ok(DutyType::reconstitute(id, name))
}
