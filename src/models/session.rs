//! Modelo de Session
//!
//! Una sesión registra la estancia de un vehículo desde la entrada hasta la
//! salida. El importe se divide en dos campos: `fixed_amount` se fija en la
//! entrada para day pass y `calculated_amount` se calcula en la salida para
//! facturación horaria; nunca se rellenan ambos para la misma sesión.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del ciclo de vida de una sesión. Completed es terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "Active",
            SessionStatus::Completed => "Completed",
        }
    }
}

/// Modalidad de cobro de una sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BillingType {
    #[default]
    Hourly,
    #[serde(rename = "Day Pass")]
    DayPass,
}

impl BillingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingType::Hourly => "Hourly",
            BillingType::DayPass => "Day Pass",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Hourly" => Some(BillingType::Hourly),
            "Day Pass" => Some(BillingType::DayPass),
            _ => None,
        }
    }
}

/// Session - mapea exactamente a la tabla sessions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub vehicle_number_plate: String,
    pub slot_id: Uuid,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub status: String,
    pub billing_type: String,
    /// Fijado en la entrada para day pass, 0 en horario
    pub fixed_amount: i64,
    /// Calculado en la salida para horario, 0 en day pass
    pub calculated_amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn is_day_pass(&self) -> bool {
        self.billing_type == BillingType::DayPass.as_str()
    }

    /// Importe total de la sesión (solo uno de los dos campos es significativo)
    pub fn total_amount(&self) -> i64 {
        self.fixed_amount + self.calculated_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_type_wire_names() {
        assert_eq!(serde_json::to_string(&BillingType::DayPass).unwrap(), "\"Day Pass\"");
        assert_eq!(serde_json::to_string(&BillingType::Hourly).unwrap(), "\"Hourly\"");

        let parsed: BillingType = serde_json::from_str("\"Day Pass\"").unwrap();
        assert_eq!(parsed, BillingType::DayPass);
    }

    #[test]
    fn test_billing_type_defaults_to_hourly() {
        assert_eq!(BillingType::default(), BillingType::Hourly);
    }

    #[test]
    fn test_billing_type_parse_roundtrip() {
        for billing in [BillingType::Hourly, BillingType::DayPass] {
            assert_eq!(BillingType::parse(billing.as_str()), Some(billing));
        }
        assert_eq!(BillingType::parse("DayPass"), None);
    }
}
