//! Rutas de administración de slots

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::slot_controller::SlotController;
use crate::dto::slot_dto::{SlotListResponse, UpdateSlotStatusRequest, UpdateSlotStatusResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_slot_router() -> Router<AppState> {
    Router::new().route("/", get(list_slots).patch(update_slot_status))
}

async fn list_slots(State(state): State<AppState>) -> Result<Json<SlotListResponse>, AppError> {
    let controller = SlotController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_slot_status(
    State(state): State<AppState>,
    Json(request): Json<UpdateSlotStatusRequest>,
) -> Result<Json<UpdateSlotStatusResponse>, AppError> {
    let controller = SlotController::new(state.pool.clone());
    let response = controller.update_status(request).await?;
    Ok(Json(response))
}
