//! DTOs del resumen de ingresos

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::session::Session;

/// Desglose de importe de una sesión: `fixed` se fija en la entrada
/// (day pass) y `calculated` en la salida (horario)
#[derive(Debug, Serialize)]
pub struct BillingAmountResponse {
    pub fixed: i64,
    pub calculated: i64,
}

/// Sesión completada, con los campos que muestra el dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSessionResponse {
    pub vehicle_number_plate: String,
    pub billing_type: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub billing_amount: BillingAmountResponse,
}

impl From<Session> for CompletedSessionResponse {
    fn from(session: Session) -> Self {
        Self {
            vehicle_number_plate: session.vehicle_number_plate,
            billing_type: session.billing_type,
            entry_time: session.entry_time,
            exit_time: session.exit_time,
            billing_amount: BillingAmountResponse {
                fixed: session.fixed_amount,
                calculated: session.calculated_amount,
            },
        }
    }
}

/// Response del resumen de ingresos
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub total_revenue: i64,
    pub sessions: Vec<CompletedSessionResponse>,
}
