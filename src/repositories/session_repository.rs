//! Repositorio de sesiones

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::{BillingType, Session, SessionStatus};
use crate::utils::errors::AppResult;

pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_active_by_plate(&self, plate: &str) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT * FROM sessions
            WHERE vehicle_number_plate = $1 AND status = $2
            LIMIT 1
            "#,
        )
        .bind(plate)
        .bind(SessionStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn find_active_by_slot(&self, slot_id: Uuid) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT * FROM sessions
            WHERE slot_id = $1 AND status = $2
            LIMIT 1
            "#,
        )
        .bind(slot_id)
        .bind(SessionStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Abrir una sesión Active; `fixed_amount` solo es distinto de 0 en day pass
    pub async fn create(
        &self,
        plate: &str,
        slot_id: Uuid,
        billing_type: &BillingType,
        fixed_amount: i64,
    ) -> AppResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (id, vehicle_number_plate, slot_id, status, billing_type, fixed_amount, calculated_amount)
            VALUES ($1, $2, $3, $4, $5, $6, 0)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate)
        .bind(slot_id)
        .bind(SessionStatus::Active.as_str())
        .bind(billing_type.as_str())
        .bind(fixed_amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Cerrar una sesión: Completed es terminal, no hay más mutaciones después
    pub async fn complete(
        &self,
        id: Uuid,
        exit_time: DateTime<Utc>,
        calculated_amount: i64,
    ) -> AppResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions
            SET status = $4, exit_time = $2, calculated_amount = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(exit_time)
        .bind(calculated_amount)
        .bind(SessionStatus::Completed.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn list_completed(&self) -> AppResult<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(
            r#"
            SELECT * FROM sessions
            WHERE status = $1
            ORDER BY exit_time DESC NULLS LAST
            "#,
        )
        .bind(SessionStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
