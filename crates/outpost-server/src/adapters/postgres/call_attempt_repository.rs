//! PostgreSQL implementation of CallAttemptRepository

use async_trait::async_trait;
use sqlx::PgPool;

use outpost::{CallAttempt, CallAttemptRepository, DomainError, PendingCallAttempt};

/// PostgreSQL implementation of CallAttemptRepository
pub struct PgCallAttemptRepository {
    pool: PgPool,
}

impl PgCallAttemptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CallAttemptRow {
    id: i64,
    provider: String,
    request_url: String,
    request_method: String,
    request_body: Option<String>,
    response_body: Option<String>,
    status_code: Option<i32>,
    requested_at: chrono::DateTime<chrono::Utc>,
    success: bool,
    error_message: Option<String>,
    elapsed_ms: i64,
}

impl From<CallAttemptRow> for CallAttempt {
    fn from(row: CallAttemptRow) -> Self {
        Self {
            id: row.id,
            provider: row.provider,
            request_url: row.request_url,
            request_method: row.request_method,
            request_body: row.request_body,
            response_body: row.response_body,
            status_code: row.status_code,
            requested_at: row.requested_at,
            success: row.success,
            error_message: row.error_message,
            elapsed_ms: row.elapsed_ms,
        }
    }
}

#[async_trait]
impl CallAttemptRepository for PgCallAttemptRepository {
    async fn append(&self, attempt: PendingCallAttempt) -> Result<CallAttempt, DomainError> {
        let row = sqlx::query_as::<_, CallAttemptRow>(
            r#"
            INSERT INTO call_attempts (
                provider, request_url, request_method, request_body, response_body,
                status_code, requested_at, success, error_message, elapsed_ms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&attempt.provider)
        .bind(&attempt.request_url)
        .bind(&attempt.request_method)
        .bind(&attempt.request_body)
        .bind(&attempt.response_body)
        .bind(attempt.status_code)
        .bind(attempt.requested_at)
        .bind(attempt.success)
        .bind(&attempt.error_message)
        .bind(attempt.elapsed_ms)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<CallAttempt>, DomainError> {
        let rows = sqlx::query_as::<_, CallAttemptRow>(
            "SELECT * FROM call_attempts ORDER BY requested_at DESC, id DESC LIMIT $1",
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CallAttempt>, DomainError> {
        let row = sqlx::query_as::<_, CallAttemptRow>("SELECT * FROM call_attempts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
