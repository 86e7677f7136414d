//! Repositorio de slots
//!
//! Los claims son UPDATEs condicionales en una sola sentencia: la transición
//! Available → Occupied solo ocurre si el slot seguía Available en el momento
//! del UPDATE, nunca como read-then-write en dos pasos.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::slot::{Slot, SlotStatus, SlotType};
use crate::utils::errors::AppResult;

pub struct SlotRepository {
    pool: PgPool,
}

impl SlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Claim automático: ocupa el slot libre compatible con menor
    /// `distance_rank`. `FOR UPDATE SKIP LOCKED` garantiza que dos requests
    /// concurrentes nunca elijan la misma fila.
    pub async fn claim_first_available(
        &self,
        plate: &str,
        allowed_types: &[SlotType],
    ) -> AppResult<Option<Slot>> {
        let types: Vec<String> = allowed_types.iter().map(|t| t.as_str().to_string()).collect();

        let slot = sqlx::query_as::<_, Slot>(
            r#"
            UPDATE slots
            SET status = 'Occupied', current_plate = $1, updated_at = NOW()
            WHERE id = (
                SELECT id FROM slots
                WHERE status = 'Available' AND slot_type = ANY($2)
                ORDER BY distance_rank ASC
                LIMIT 1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING *
            "#,
        )
        .bind(plate)
        .bind(&types)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slot)
    }

    /// Claim manual: ocupa el slot indicado solo si sigue Available.
    /// Devuelve None si otro request lo ocupó entre el lookup y el claim.
    pub async fn claim_if_available(&self, id: Uuid, plate: &str) -> AppResult<Option<Slot>> {
        let slot = sqlx::query_as::<_, Slot>(
            r#"
            UPDATE slots
            SET status = 'Occupied', current_plate = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'Available'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slot)
    }

    /// Liberar un slot, sea cual sea su estado previo (salida normal o rollback)
    pub async fn release(&self, id: Uuid) -> AppResult<Option<Slot>> {
        let slot = sqlx::query_as::<_, Slot>(
            r#"
            UPDATE slots
            SET status = 'Available', current_plate = NULL, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slot)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Slot>> {
        let slot = sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(slot)
    }

    pub async fn find_by_number(&self, slot_number: &str) -> AppResult<Option<Slot>> {
        let slot = sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE slot_number = $1")
            .bind(slot_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(slot)
    }

    /// Lookup por matrícula denormalizada (fallback tolerante de exit/locate)
    pub async fn find_occupied_by_plate(&self, plate: &str) -> AppResult<Option<Slot>> {
        let slot = sqlx::query_as::<_, Slot>(
            "SELECT * FROM slots WHERE current_plate = $1 AND status = 'Occupied' LIMIT 1",
        )
        .bind(plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slot)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Slot>> {
        let slots = sqlx::query_as::<_, Slot>(
            "SELECT * FROM slots ORDER BY level ASC, slot_number ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    /// Cambio de estado administrativo; Maintenance limpia la matrícula
    pub async fn set_status(
        &self,
        id: Uuid,
        status: &SlotStatus,
        clear_plate: bool,
    ) -> AppResult<Option<Slot>> {
        let query = if clear_plate {
            r#"
            UPDATE slots
            SET status = $2, current_plate = NULL, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        } else {
            r#"
            UPDATE slots
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        };

        let slot = sqlx::query_as::<_, Slot>(query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(slot)
    }
}
