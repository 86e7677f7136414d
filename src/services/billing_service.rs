//! Cálculo de tarifas
//!
//! Facturación horaria por tramos: la duración se redondea hacia ARRIBA a
//! horas completas (cualquier fracción de hora se cobra como hora entera),
//! se aplica el primer tramo cuyo máximo cubre las horas, y más allá del
//! último tramo rige el tope diario.

use crate::config::billing::BillingConfig;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;

/// Horas facturables de una estancia: fracción de hora cuenta como hora entera
fn billable_hours(duration_ms: i64) -> i64 {
    if duration_ms <= 0 {
        return 0;
    }
    (duration_ms + MS_PER_HOUR - 1) / MS_PER_HOUR
}

/// Importe horario para una estancia de `duration_ms` milisegundos
pub fn calculate_hourly_fee(duration_ms: i64, config: &BillingConfig) -> i64 {
    let hours = billable_hours(duration_ms);

    for tier in &config.hourly_tiers {
        if hours <= tier.max_hours {
            return tier.fee;
        }
    }

    config.daily_cap_fee
}

/// Duración en minutos para reporting, redondeada al minuto más cercano
pub fn duration_minutes(duration_ms: i64) -> i64 {
    if duration_ms <= 0 {
        return 0;
    }
    (duration_ms + MS_PER_MINUTE / 2) / MS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::billing::BillingTier;

    fn reference_config() -> BillingConfig {
        BillingConfig {
            hourly_tiers: vec![
                BillingTier { max_hours: 1, fee: 50 },
                BillingTier { max_hours: 3, fee: 100 },
                BillingTier { max_hours: 6, fee: 150 },
            ],
            daily_cap_fee: 200,
            day_pass_fee: 150,
        }
    }

    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn test_zero_duration_bills_one_hour_minimum() {
        assert_eq!(calculate_hourly_fee(0, &reference_config()), 50);
    }

    #[test]
    fn test_tier_boundaries() {
        let config = reference_config();
        assert_eq!(calculate_hourly_fee(1, &config), 50);
        assert_eq!(calculate_hourly_fee(HOUR_MS, &config), 50);
        assert_eq!(calculate_hourly_fee(HOUR_MS + 1, &config), 100);
        assert_eq!(calculate_hourly_fee(3 * HOUR_MS, &config), 100);
        assert_eq!(calculate_hourly_fee(3 * HOUR_MS + 1, &config), 150);
        assert_eq!(calculate_hourly_fee(6 * HOUR_MS, &config), 150);
        assert_eq!(calculate_hourly_fee(6 * HOUR_MS + 1, &config), 200);
        assert_eq!(calculate_hourly_fee(48 * HOUR_MS, &config), 200);
    }

    #[test]
    fn test_partial_hours_round_up() {
        let config = reference_config();
        // 1h 1m cuenta como 2 horas
        assert_eq!(calculate_hourly_fee(HOUR_MS + 60_000, &config), 100);
        // 5h 59m cuenta como 6 horas
        assert_eq!(calculate_hourly_fee(6 * HOUR_MS - 60_000, &config), 150);
    }

    #[test]
    fn test_fee_is_monotonically_non_decreasing() {
        let config = reference_config();
        let mut previous = 0;
        for minutes in 0..(10 * 60) {
            let fee = calculate_hourly_fee(minutes * 60_000, &config);
            assert!(
                fee >= previous,
                "fee bajó de {} a {} en el minuto {}",
                previous,
                fee,
                minutes
            );
            previous = fee;
        }
    }

    #[test]
    fn test_custom_tariff_is_respected() {
        let config = BillingConfig {
            hourly_tiers: vec![
                BillingTier { max_hours: 2, fee: 10 },
                BillingTier { max_hours: 4, fee: 25 },
            ],
            daily_cap_fee: 60,
            day_pass_fee: 40,
        };
        assert_eq!(calculate_hourly_fee(HOUR_MS, &config), 10);
        assert_eq!(calculate_hourly_fee(3 * HOUR_MS, &config), 25);
        assert_eq!(calculate_hourly_fee(9 * HOUR_MS, &config), 60);
    }

    #[test]
    fn test_duration_minutes_rounds_to_nearest() {
        assert_eq!(duration_minutes(0), 0);
        assert_eq!(duration_minutes(29_999), 0);
        assert_eq!(duration_minutes(30_000), 1);
        assert_eq!(duration_minutes(90_000), 2);
        assert_eq!(duration_minutes(61 * 60_000), 61);
    }
}
