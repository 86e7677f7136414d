//! Repositorio de vehículos

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta idempotente por matrícula: cada entrada crea o actualiza el registro
    pub async fn upsert_by_plate(
        &self,
        plate: &str,
        vehicle_type: &VehicleType,
    ) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, number_plate, vehicle_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (number_plate)
            DO UPDATE SET vehicle_type = EXCLUDED.vehicle_type, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate)
        .bind(vehicle_type.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
