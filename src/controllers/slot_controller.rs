//! Administración de slots

use sqlx::PgPool;

use crate::dto::slot_dto::{SlotListResponse, UpdateSlotStatusRequest, UpdateSlotStatusResponse};
use crate::models::slot::SlotStatus;
use crate::repositories::slot_repository::SlotRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct SlotController {
    slots: SlotRepository,
}

impl SlotController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            slots: SlotRepository::new(pool),
        }
    }

    /// Listado completo para el dashboard, ordenado por nivel y código
    pub async fn list(&self) -> AppResult<SlotListResponse> {
        let slots = self.slots.list_all().await?;
        Ok(SlotListResponse {
            slots: slots.into_iter().map(Into::into).collect(),
        })
    }

    /// Cambio de estado administrativo (alta/baja de mantenimiento)
    pub async fn update_status(
        &self,
        request: UpdateSlotStatusRequest,
    ) -> AppResult<UpdateSlotStatusResponse> {
        let slot_number = request
            .slot_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let status_raw = request
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (slot_number, status_raw) = match (slot_number, status_raw) {
            (Some(slot_number), Some(status_raw)) => (slot_number, status_raw),
            _ => {
                return Err(AppError::BadRequest(
                    "slotNumber and status are required".to_string(),
                ))
            }
        };

        let status = SlotStatus::parse(status_raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown slot status '{}'", status_raw)))?;

        let slot = self
            .slots
            .find_by_number(slot_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Slot not found".to_string()))?;

        // Mantenimiento desaloja la matrícula denormalizada
        let clear_plate = matches!(status, SlotStatus::Maintenance);
        self.slots.set_status(slot.id, &status, clear_plate).await?;

        Ok(UpdateSlotStatusResponse { success: true })
    }
}
