//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y la categoría de vehículo.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categoría de vehículo admitida por la instalación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Bike,
    #[serde(rename = "EV")]
    Ev,
    Handicap,
    #[serde(rename = "Handicap Accessible")]
    HandicapAccessible,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Bike => "Bike",
            VehicleType::Ev => "EV",
            VehicleType::Handicap => "Handicap",
            VehicleType::HandicapAccessible => "Handicap Accessible",
        }
    }
}

/// Vehicle - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub number_plate: String,
    pub vehicle_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&VehicleType::HandicapAccessible).unwrap(),
            "\"Handicap Accessible\""
        );
        assert_eq!(serde_json::to_string(&VehicleType::Ev).unwrap(), "\"EV\"");

        let parsed: VehicleType = serde_json::from_str("\"Handicap Accessible\"").unwrap();
        assert_eq!(parsed, VehicleType::HandicapAccessible);
    }

    #[test]
    fn test_vehicle_type_rejects_unknown_category() {
        assert!(serde_json::from_str::<VehicleType>("\"Truck\"").is_err());
    }
}
