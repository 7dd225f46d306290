//! PostgreSQL implementation of DutyLogRepository.
//!
//! `duty_logs.duty_id` is kept without a delete cascade so the trail
//! survives whatever happens to the duty row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::duty::{DutyAction, DutyLog};
use crate::domain::foundation::{DomainError, DutyId, DutyLogId, ErrorCode, Timestamp};
use crate::ports::DutyLogRepository;

/// PostgreSQL implementation of DutyLogRepository.
#[derive(Clone)]
pub struct PostgresDutyLogRepository {
    pool: PgPool,
}

impl PostgresDutyLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DutyLogRepository for PostgresDutyLogRepository {
    async fn save(&self, log: &DutyLog) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO duty_logs (id, duty_id, action, details, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(log.id().as_uuid())
        .bind(log.duty_id().as_uuid())
        .bind(log.action().as_str())
        .bind(log.details())
        .bind(log.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert duty log", e))?;

        Ok(())
    }

    async fn find_by_duty_id(&self, duty_id: &DutyId) -> Result<Vec<DutyLog>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, duty_id, action, details, created_at
            FROM duty_logs
            WHERE duty_id = $1
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(duty_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch duty logs", e))?;

        rows.into_iter().map(row_to_log).collect()
    }

    async fn find_all(&self) -> Result<Vec<DutyLog>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, duty_id, action, details, created_at
            FROM duty_logs
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch duty logs", e))?;

        rows.into_iter().map(row_to_log).collect()
    }
}

fn row_to_log(row: sqlx::postgres::PgRow) -> Result<DutyLog, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let duty_id: uuid::Uuid = row
        .try_get("duty_id")
        .map_err(|e| DomainError::database("Failed to get duty_id", e))?;
    let action: String = row
        .try_get("action")
        .map_err(|e| DomainError::database("Failed to get action", e))?;
    let details: String = row
        .try_get("details")
        .map_err(|e| DomainError::database("Failed to get details", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    Ok(DutyLog::reconstitute(
        DutyLogId::from_uuid(id),
        DutyId::from_uuid(duty_id),
        parse_action(&action)?,
        details,
        Timestamp::from_datetime(created_at),
    ))
}

fn parse_action(s: &str) -> Result<DutyAction, DomainError> {
    s.parse::<DutyAction>().map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid duty log action: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_column_roundtrips() {
        for action in [DutyAction::Created, DutyAction::Updated, DutyAction::Deleted] {
            assert_eq!(parse_action(action.as_str()).unwrap(), action);
        }
    }

    #[test]
    fn unknown_action_is_database_error() {
        let err = parse_action("ARCHIVED").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
