//! Configuration module

use std::env;
use std::path::PathBuf;

use diagnostic_core::constants::DEFAULT_MODEL;
use diagnostic_core::Registry;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the fitted artifacts
    pub models_dir: PathBuf,

    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// True when PORT was set explicitly (no fallback to the next free port)
    pub port_explicit: bool,

    /// Allowed CORS origin, `*` for any
    pub frontend_url: String,

    /// Model used when a predict request names none
    pub default_model: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|p| p.parse().ok());

        Self {
            models_dir: env::var("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models")),

            host: env::var("HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: port.unwrap_or(5000),
            port_explicit: port.is_some(),

            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "*".to_string()),

            default_model: env::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.frontend_url == "*"
    }

    /// DEFAULT_MODEL must name a registered model
    pub fn check_default_model(&self, registry: &Registry) -> anyhow::Result<()> {
        if !registry.contains(&self.default_model) {
            anyhow::bail!(
                "DEFAULT_MODEL '{}' is not registered (available: {})",
                self.default_model,
                registry.names().collect::<Vec<_>>().join(", ")
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            host: "127.0.0.1".to_string(),
            port: 5000,
            port_explicit: false,
            frontend_url: "*".to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            environment: "development".to_string(),
        }
    }
}
