//! Health check route

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    db: &'static str,
    timestamp: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = if state.db.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "OK",
        db,
        timestamp: Utc::now().to_rfc3339(),
    })
}
