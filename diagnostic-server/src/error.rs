//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use diagnostic_core::CoreError;
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Startup state
    #[error("Models not loaded")]
    ModelsNotLoaded,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Client errors
    #[error("{0}")]
    BadRequest(String),

    // Inference errors
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ModelsNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Core(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = match &self {
            AppError::ModelsNotLoaded => {
                "Models not loaded. Provide the fitted artifacts in MODELS_DIR and restart.".to_string()
            }
            AppError::Core(err) if !err.is_client_error() => {
                tracing::error!("Inference error: {}", err);
                "Prediction failed".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
