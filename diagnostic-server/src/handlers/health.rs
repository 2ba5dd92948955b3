//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::models::ModelState;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    models_loaded: bool,
    model_count: usize,
    loaded_at: i64,
}

#[derive(Serialize)]
pub struct UnhealthyResponse {
    status: &'static str,
    message: &'static str,
    reason: String,
}

pub async fn check(State(state): State<AppState>) -> Response {
    match state.models.as_ref() {
        ModelState::Loaded(artifacts) => Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().timestamp(),
            models_loaded: true,
            model_count: artifacts.engine.registry().len(),
            loaded_at: artifacts.loaded_at.timestamp(),
        })
        .into_response(),
        ModelState::NotLoaded { reason } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(UnhealthyResponse {
                status: "error",
                message: "Models not loaded",
                reason: reason.clone(),
            }),
        )
            .into_response(),
    }
}
