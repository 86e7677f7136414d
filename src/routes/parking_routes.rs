//! Rutas de entrada/salida/localización

use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::parking_controller::ParkingController;
use crate::dto::parking_dto::{
    EntryRequest, EntryResponse, ExitRequest, ExitResponse, LocateRequest, LocateResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parking_router() -> Router<AppState> {
    Router::new()
        .route("/entry", post(register_entry))
        .route("/exit", post(register_exit))
        .route("/locate", post(locate_vehicle))
}

async fn register_entry(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let controller = ParkingController::new(state.pool.clone(), state.billing.clone());
    let response = controller.register_entry(request).await?;
    Ok(Json(response))
}

async fn register_exit(
    State(state): State<AppState>,
    Json(request): Json<ExitRequest>,
) -> Result<Json<ExitResponse>, AppError> {
    let controller = ParkingController::new(state.pool.clone(), state.billing.clone());
    let response = controller.register_exit(request).await?;
    Ok(Json(response))
}

async fn locate_vehicle(
    State(state): State<AppState>,
    Json(request): Json<LocateRequest>,
) -> Result<Json<LocateResponse>, AppError> {
    let controller = ParkingController::new(state.pool.clone(), state.billing.clone());
    let response = controller.locate(request).await?;
    Ok(Json(response))
}
