//! Asignación de slots
//!
//! Resuelve qué categorías de slot acepta cada vehículo y ejecuta el claim
//! (automático o manual) contra el repositorio. Tras cada claim se comprueba
//! que ningún otro registro Active referencie ya ese slot; si lo hay, el
//! claim se revierte con release antes de fallar.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::slot::{Slot, SlotType};
use crate::models::vehicle::VehicleType;
use crate::repositories::session_repository::SessionRepository;
use crate::repositories::slot_repository::SlotRepository;
use crate::utils::errors::{AppError, AppResult};

/// Categorías de slot aceptables para una categoría de vehículo
///
/// Car y Handicap caen en la zona general: el arm por defecto es un
/// fallback permisivo, no una validación.
pub fn allowed_slot_types(vehicle_type: &VehicleType) -> Vec<SlotType> {
    match vehicle_type {
        VehicleType::HandicapAccessible => vec![SlotType::Handicap, SlotType::HandicapAccessible],
        VehicleType::Ev => vec![SlotType::Ev],
        VehicleType::Bike => vec![SlotType::Bike],
        _ => vec![SlotType::Regular, SlotType::Compact],
    }
}

pub struct SlotAssignmentService {
    slots: SlotRepository,
    sessions: SessionRepository,
}

impl SlotAssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            slots: SlotRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
        }
    }

    /// Claim automático: el slot libre compatible más cercano a la entrada
    pub async fn claim_automatic(
        &self,
        plate: &str,
        vehicle_type: &VehicleType,
    ) -> AppResult<Slot> {
        let allowed = allowed_slot_types(vehicle_type);
        let slot = self
            .slots
            .claim_first_available(plate, &allowed)
            .await?
            .ok_or_else(|| AppError::Conflict("No available slot".to_string()))?;

        self.guard_against_active_session(slot).await
    }

    /// Claim manual por código de slot
    pub async fn claim_manual(
        &self,
        slot_number: &str,
        plate: &str,
        vehicle_type: &VehicleType,
    ) -> AppResult<Slot> {
        let slot = self
            .slots
            .find_by_number(slot_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid slot code".to_string()))?;

        let allowed = allowed_slot_types(vehicle_type);
        let compatible = allowed.iter().any(|t| t.as_str() == slot.slot_type);
        if !slot.is_available() || !compatible {
            return Err(AppError::Conflict("Incompatible or unavailable slot".to_string()));
        }

        // El lookup y el claim no son atómicos entre sí: el UPDATE condicional
        // revalida el estado y devuelve None si el slot se ocupó entre medias.
        let slot = self
            .slots
            .claim_if_available(slot.id, plate)
            .await?
            .ok_or_else(|| AppError::Conflict("Incompatible or unavailable slot".to_string()))?;

        self.guard_against_active_session(slot).await
    }

    /// Liberar un slot (salida normal o rollback)
    pub async fn release(&self, slot_id: Uuid) -> AppResult<Option<Slot>> {
        self.slots.release(slot_id).await
    }

    /// Guardia post-claim contra datos duplicados o legacy: si otra sesión
    /// Active ya referencia el slot recién ocupado, se revierte el claim.
    /// Debe ejecutarse antes de crear la sesión, nunca después.
    async fn guard_against_active_session(&self, slot: Slot) -> AppResult<Slot> {
        if self.sessions.find_active_by_slot(slot.id).await?.is_some() {
            self.slots.release(slot.id).await?;
            return Err(AppError::Conflict(
                "Selected slot is currently active with another vehicle".to_string(),
            ));
        }
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handicap_accessible_vehicles_use_handicap_zone() {
        assert_eq!(
            allowed_slot_types(&VehicleType::HandicapAccessible),
            vec![SlotType::Handicap, SlotType::HandicapAccessible]
        );
    }

    #[test]
    fn test_bike_and_ev_have_dedicated_zones() {
        assert_eq!(allowed_slot_types(&VehicleType::Bike), vec![SlotType::Bike]);
        assert_eq!(allowed_slot_types(&VehicleType::Ev), vec![SlotType::Ev]);
    }

    #[test]
    fn test_remaining_categories_fall_back_to_general_zone() {
        assert_eq!(
            allowed_slot_types(&VehicleType::Car),
            vec![SlotType::Regular, SlotType::Compact]
        );
        assert_eq!(
            allowed_slot_types(&VehicleType::Handicap),
            vec![SlotType::Regular, SlotType::Compact]
        );
    }

    #[test]
    fn test_compatible_set_is_never_empty() {
        let categories = [
            VehicleType::Car,
            VehicleType::Bike,
            VehicleType::Ev,
            VehicleType::Handicap,
            VehicleType::HandicapAccessible,
        ];
        for vehicle_type in &categories {
            assert!(!allowed_slot_types(vehicle_type).is_empty());
            // determinista: dos llamadas devuelven lo mismo
            assert_eq!(allowed_slot_types(vehicle_type), allowed_slot_types(vehicle_type));
        }
    }
}
