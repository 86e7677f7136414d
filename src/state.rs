//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::billing::BillingConfig;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub billing: BillingConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, billing: BillingConfig) -> Self {
        Self { pool, config, billing }
    }
}
