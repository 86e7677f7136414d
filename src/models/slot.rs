//! Modelo de Slot
//!
//! Un slot es una plaza física de aparcamiento con categoría, nivel y
//! estado de ocupación. `current_plate` está denormalizado para lookups
//! y display rápidos: es no-nulo si y solo si el slot está Occupied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categoría de slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    Regular,
    Compact,
    Bike,
    #[serde(rename = "EV")]
    Ev,
    Handicap,
    #[serde(rename = "Handicap Accessible")]
    HandicapAccessible,
}

impl SlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Regular => "Regular",
            SlotType::Compact => "Compact",
            SlotType::Bike => "Bike",
            SlotType::Ev => "EV",
            SlotType::Handicap => "Handicap",
            SlotType::HandicapAccessible => "Handicap Accessible",
        }
    }
}

/// Estado de ocupación de un slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Occupied,
    Maintenance,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Occupied => "Occupied",
            SlotStatus::Maintenance => "Maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(SlotStatus::Available),
            "Occupied" => Some(SlotStatus::Occupied),
            "Maintenance" => Some(SlotStatus::Maintenance),
            _ => None,
        }
    }
}

/// Slot - mapea exactamente a la tabla slots
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Slot {
    pub id: Uuid,
    /// Código legible por humanos, ej. "G-H-001"
    pub slot_number: String,
    pub slot_type: String,
    pub status: String,
    pub current_plate: Option<String>,
    /// Nivel de la instalación, 0 = planta baja
    pub level: i32,
    /// Desempate entre slots libres compatibles: menor = más cerca de la entrada
    pub distance_rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_status_parse() {
        assert_eq!(SlotStatus::parse("Available"), Some(SlotStatus::Available));
        assert_eq!(SlotStatus::parse("Occupied"), Some(SlotStatus::Occupied));
        assert_eq!(SlotStatus::parse("Maintenance"), Some(SlotStatus::Maintenance));
        assert_eq!(SlotStatus::parse("available"), None);
        assert_eq!(SlotStatus::parse(""), None);
    }

    #[test]
    fn test_slot_type_wire_names() {
        assert_eq!(serde_json::to_string(&SlotType::Ev).unwrap(), "\"EV\"");
        assert_eq!(
            serde_json::to_string(&SlotType::HandicapAccessible).unwrap(),
            "\"Handicap Accessible\""
        );
    }
}
