//! DTOs de administración de slots

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::Slot;

/// Response de slot para el dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub slot_id: Uuid,
    pub slot_number: String,
    pub slot_type: String,
    pub status: String,
    pub current_plate: Option<String>,
    pub level: i32,
    pub distance_rank: i32,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            slot_id: slot.id,
            slot_number: slot.slot_number,
            slot_type: slot.slot_type,
            status: slot.status,
            current_plate: slot.current_plate,
            level: slot.level,
            distance_rank: slot.distance_rank,
        }
    }
}

/// Listado completo de slots, ordenado por nivel y código
#[derive(Debug, Serialize)]
pub struct SlotListResponse {
    pub slots: Vec<SlotResponse>,
}

/// Request para cambiar el estado de un slot (alta/baja de mantenimiento)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotStatusRequest {
    pub slot_number: Option<String>,
    pub status: Option<String>,
}

/// Response de actualización de estado
#[derive(Debug, Serialize)]
pub struct UpdateSlotStatusResponse {
    pub success: bool,
}
