//! Resumen de ingresos
//!
//! Agregación de solo-lectura sobre sesiones completadas, sin efectos.

use sqlx::PgPool;

use crate::dto::revenue_dto::RevenueResponse;
use crate::repositories::session_repository::SessionRepository;
use crate::utils::errors::AppResult;

pub struct RevenueController {
    sessions: SessionRepository,
}

impl RevenueController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: SessionRepository::new(pool),
        }
    }

    pub async fn summary(&self) -> AppResult<RevenueResponse> {
        let sessions = self.sessions.list_completed().await?;

        let total_revenue = sessions.iter().map(|s| s.total_amount()).sum();

        Ok(RevenueResponse {
            total_revenue,
            sessions: sessions.into_iter().map(Into::into).collect(),
        })
    }
}
