//! DTOs de entrada/salida/localización de vehículos

use serde::{Deserialize, Serialize};

use crate::models::session::BillingType;
use crate::models::slot::Slot;
use crate::models::vehicle::VehicleType;

/// Request para registrar la entrada de un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    pub plate: Option<String>,
    pub vehicle_type: VehicleType,
    /// Código de slot para asignación manual; ausente = asignación automática
    #[serde(default)]
    pub slot_number: Option<String>,
    #[serde(default)]
    pub billing_type: BillingType,
}

/// Response de entrada: slot asignado y cobro en puerta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub success: bool,
    pub slot_number: String,
    pub level: i32,
    pub billing_type: BillingType,
    /// Importe cobrado en la entrada (0 en facturación horaria)
    pub fee: i64,
}

/// Request para registrar la salida de un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitRequest {
    pub plate: Option<String>,
}

/// Response de salida: duración y cobro final
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResponse {
    pub success: bool,
    pub slot_number: String,
    /// Duración en minutos, redondeada al minuto más cercano
    pub duration: i64,
    pub fee: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    pub already_collected: bool,
}

/// Request para localizar un vehículo por matrícula
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateRequest {
    pub plate: Option<String>,
}

/// Response de localización
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<String>,
}

impl LocateResponse {
    pub fn located(slot: &Slot) -> Self {
        Self {
            found: true,
            slot_number: Some(slot.slot_number.clone()),
            level: Some(slot.level),
            slot_type: Some(slot.slot_type.clone()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            slot_number: None,
            level: None,
            slot_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_request_deserializes_camel_case() {
        let request: EntryRequest = serde_json::from_str(
            r#"{"plate": "TN07CV7077", "vehicleType": "Car", "slotNumber": "G-R-001", "billingType": "Day Pass"}"#,
        )
        .unwrap();

        assert_eq!(request.plate.as_deref(), Some("TN07CV7077"));
        assert_eq!(request.vehicle_type, VehicleType::Car);
        assert_eq!(request.slot_number.as_deref(), Some("G-R-001"));
        assert_eq!(request.billing_type, BillingType::DayPass);
    }

    #[test]
    fn test_entry_request_billing_defaults_to_hourly() {
        let request: EntryRequest =
            serde_json::from_str(r#"{"plate": "TN07CV7077", "vehicleType": "Bike"}"#).unwrap();

        assert_eq!(request.billing_type, BillingType::Hourly);
        assert!(request.slot_number.is_none());
    }

    #[test]
    fn test_locate_response_omits_empty_fields() {
        let body = serde_json::to_value(LocateResponse::not_found()).unwrap();
        assert_eq!(body, serde_json::json!({ "found": false }));
    }
}
