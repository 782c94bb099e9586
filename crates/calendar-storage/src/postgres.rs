// Postgres-backed event store
//
// One parameterized statement per operation, no cross-operation
// transactions. The `events` table is assumed to pre-exist:
// id BIGSERIAL PRIMARY KEY, created_by TEXT, created_at TIMESTAMPTZ,
// title TEXT, description TEXT, event_time TIMESTAMPTZ, remind_at TIMESTAMPTZ.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Result, StoreError};
use crate::models::{CreateEvent, EventRow, UpdateEvent};
use crate::traits::EventStore;

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and verify liveness
    ///
    /// A failed connection or probe is returned to the caller; startup is
    /// expected to treat it as fatal rather than retry.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        tracing::debug!("database liveness probe succeeded");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn create(&self, input: CreateEvent) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (created_by, created_at, title, description, event_time, remind_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_by, created_at, title, description, event_time, remind_at
            "#,
        )
        .bind(&input.created_by)
        .bind(input.created_at)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_time)
        .bind(input.remind_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, input: UpdateEvent) -> Result<EventRow> {
        // Zero-row updates don't error at the driver level; the absent
        // RETURNING row is what distinguishes a missing id from success.
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET title = $2, description = $3, event_time = $4, remind_at = $5
            WHERE id = $1
            RETURNING id, created_by, created_at, title, description, event_time, remind_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_time)
        .bind(input.remind_at)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<EventRow>> {
        // No ORDER BY: the contract leaves ordering to the storage engine.
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, created_by, created_at, title, description, event_time, remind_at FROM events",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, created_by, created_at, title, description, event_time, remind_at FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StoreError::NotFound)
    }
}
