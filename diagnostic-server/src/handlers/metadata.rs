//! Dataset metadata, statistics and model listing handlers

use axum::{extract::State, Json};
use diagnostic_core::logic::artifacts::Dataset;
use diagnostic_core::{FeatureStats, ModelInfo};

use crate::models::MetadataResponse;
use crate::{AppError, AppResult, AppState};

/// Dataset metadata plus the top features
pub async fn metadata(State(state): State<AppState>) -> AppResult<Json<MetadataResponse>> {
    let artifacts = state.models.artifacts()?;
    let schema = artifacts.engine.schema();

    Ok(Json(MetadataResponse {
        feature_names: schema.names().to_vec(),
        target_names: artifacts.metadata.target_names.clone(),
        n_features: schema.len(),
        n_samples: artifacts.metadata.n_samples,
        class_distribution: artifacts.metadata.class_distribution.clone(),
        top_features: artifacts.top_features.clone(),
        layout_hash: format!("{:08x}", artifacts.layout.hash),
    }))
}

/// Per-feature min/max/mean/std for slider ranges
pub async fn feature_stats(State(state): State<AppState>) -> AppResult<Json<FeatureStats>> {
    let engine = state.models.engine()?;
    Ok(Json(engine.stats().clone()))
}

/// Registered models in registration order
pub async fn models(State(state): State<AppState>) -> AppResult<Json<Vec<ModelInfo>>> {
    let engine = state.models.engine()?;
    Ok(Json(engine.describe_models()))
}

/// Full dataset table, when one was shipped with the artifacts
pub async fn dataset(State(state): State<AppState>) -> AppResult<Json<Dataset>> {
    let artifacts = state.models.artifacts()?;
    artifacts
        .dataset
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Dataset not available".to_string()))
}
