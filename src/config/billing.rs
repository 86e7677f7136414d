//! Configuración de tarifas
//!
//! Tabla de tramos horarios, tope diario y tarifa plana de day pass.
//! Los importes pueden ajustarse por variable de entorno sin tocar código;
//! los valores por defecto son la tarifa de referencia de la instalación.

use std::env;

/// Un tramo de facturación horaria: cubre hasta `max_hours` horas (inclusive)
#[derive(Debug, Clone)]
pub struct BillingTier {
    pub max_hours: i64,
    pub fee: i64,
}

/// Tarifas de la instalación, en unidades enteras de moneda
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Tramos horarios en orden ascendente de `max_hours`
    pub hourly_tiers: Vec<BillingTier>,
    /// Importe aplicado más allá del último tramo
    pub daily_cap_fee: i64,
    /// Tarifa plana cobrada en la entrada para day pass
    pub day_pass_fee: i64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            hourly_tiers: vec![
                BillingTier { max_hours: 1, fee: env_fee("BILLING_TIER_1H_FEE", 50) },
                BillingTier { max_hours: 3, fee: env_fee("BILLING_TIER_3H_FEE", 100) },
                BillingTier { max_hours: 6, fee: env_fee("BILLING_TIER_6H_FEE", 150) },
            ],
            daily_cap_fee: env_fee("BILLING_DAILY_CAP_FEE", 200),
            day_pass_fee: env_fee("BILLING_DAY_PASS_FEE", 150),
        }
    }
}

fn env_fee(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
