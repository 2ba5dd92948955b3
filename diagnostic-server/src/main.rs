//! Diagnostic Demo API Server
//!
//! Serves breast-cancer diagnostic predictions and explanations from
//! several fitted classifiers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  DIAGNOSTIC SERVER                   │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌───────────────────────────────┐   │
//! │  │  API      │──►│  InferenceEngine              │   │
//! │  │  (Axum)   │   │  schema · stats · registry    │   │
//! │  └───────────┘   └───────────────▲───────────────┘   │
//! │                                  │ startup           │
//! │                          ┌───────┴───────┐           │
//! │                          │  MODELS_DIR   │           │
//! │                          └───────────────┘           │
//! └──────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
use models::ModelState;

/// Ports tried after the default one when PORT is not set
const PORT_ATTEMPTS: u16 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "diagnostic_server=debug,diagnostic_core=info,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Diagnostic server starting ({})", config.environment);

    let models = load_models(&config)?;
    let state = AppState {
        config: config.clone(),
        models: Arc::new(models),
    };

    let app = create_router(state)?;

    let listener = bind(&config).await?;
    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub models: Arc<ModelState>,
}

/// Load artifacts from MODELS_DIR.
///
/// Absent or unreadable artifacts leave the server up in the not-loaded
/// state; artifacts that contradict each other, or a DEFAULT_MODEL that
/// names no loaded model, abort startup.
fn load_models(config: &config::Config) -> anyhow::Result<ModelState> {
    match diagnostic_core::load_from_dir(&config.models_dir) {
        Ok(artifacts) => {
            config.check_default_model(artifacts.engine.registry())?;
            tracing::info!(
                "✅ Models loaded: {}",
                artifacts.engine.list_models().join(", ")
            );
            Ok(ModelState::loaded(artifacts))
        }
        Err(e) if e.is_configuration_defect() => {
            Err(anyhow::Error::new(e).context("inconsistent model artifacts"))
        }
        Err(e) => {
            tracing::warn!("Models not loaded: {} - model routes will return 503", e);
            Ok(ModelState::not_loaded(e.to_string()))
        }
    }
}

/// Bind HOST:PORT; without an explicit PORT, walk up to the next free port
async fn bind(config: &config::Config) -> anyhow::Result<TcpListener> {
    let ip = config
        .host
        .parse()
        .with_context(|| format!("invalid HOST '{}'", config.host))?;

    let attempts = if config.port_explicit { 1 } else { PORT_ATTEMPTS };
    let mut last_error = None;

    for offset in 0..attempts {
        let addr = SocketAddr::new(ip, config.port.saturating_add(offset));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if offset > 0 {
                    tracing::warn!("Port {} is in use, using port {} instead", config.port, addr.port());
                }
                return Ok(listener);
            }
            Err(e) => {
                tracing::debug!("Bind {} failed: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    let error = last_error.map(anyhow::Error::new).unwrap_or_else(|| anyhow::anyhow!("no port attempted"));
    Err(error.context(format!(
        "could not bind {} (ports {}..{})",
        config.host,
        config.port,
        config.port.saturating_add(attempts)
    )))
}

/// Create the main router with all routes
fn create_router(state: AppState) -> anyhow::Result<Router> {
    let cors = if state.config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin: HeaderValue = state
            .config
            .frontend_url
            .parse()
            .with_context(|| format!("invalid FRONTEND_URL '{}'", state.config.frontend_url))?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let router = Router::new()
        .route("/api/health", get(handlers::health::check))
        .route("/api/metadata", get(handlers::metadata::metadata))
        .route("/api/feature-stats", get(handlers::metadata::feature_stats))
        .route("/api/models", get(handlers::metadata::models))
        .route("/api/dataset", get(handlers::metadata::dataset))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/predict-all", post(handlers::predict::predict_all))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}
