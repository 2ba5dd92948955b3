//! Prediction handlers

use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use diagnostic_core::PredictionResult;

use crate::models::{PredictAllRequest, PredictRequest};
use crate::{AppError, AppResult, AppState};

/// Predict with a single model
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let engine = state.models.engine()?;
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let model = request.model.as_deref().unwrap_or(&state.config.default_model);
    tracing::debug!("predict: model={} supplied_features={}", model, request.features.len());

    let result = engine.predict_one(model, &request.features)?;
    Ok(Json(result))
}

/// Predict with every registered model
pub async fn predict_all(
    State(state): State<AppState>,
    payload: Result<Json<PredictAllRequest>, JsonRejection>,
) -> AppResult<Json<BTreeMap<String, PredictionResult>>> {
    let engine = state.models.engine()?;
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    tracing::debug!("predict-all: supplied_features={}", request.features.len());

    let results = engine.predict_all(&request.features)?;
    Ok(Json(results))
}
