//! Rutas del resumen de ingresos

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::revenue_controller::RevenueController;
use crate::dto::revenue_dto::RevenueResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_revenue_router() -> Router<AppState> {
    Router::new().route("/", get(revenue_summary))
}

async fn revenue_summary(
    State(state): State<AppState>,
) -> Result<Json<RevenueResponse>, AppError> {
    let controller = RevenueController::new(state.pool.clone());
    let response = controller.summary().await?;
    Ok(Json(response))
}
