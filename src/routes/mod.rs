//! Routers de la API
//!
//! Cada grupo de rutas expone una factory `create_*_router`; `create_app`
//! ensambla la aplicación completa con CORS y estado compartido.

pub mod parking_routes;
pub mod revenue_routes;
pub mod slot_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", parking_routes::create_parking_router())
        .nest("/api/slots", slot_routes::create_slot_router())
        .nest("/api/revenue", revenue_routes::create_revenue_router())
        .layer(cors)
        .with_state(state)
}

/// Health check para probes y el poller del dashboard
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "parking-facility",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
