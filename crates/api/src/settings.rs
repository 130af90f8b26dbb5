//! Service Configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level service settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Model artifact locations
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// Serialized regression model
    pub artifact_path: PathBuf,
    /// Ordered selected-feature list
    pub features_path: PathBuf,
}

impl Settings {
    /// Load settings: built-in defaults, then `config/default.toml` if
    /// present, then `CLV_`-prefixed environment overrides
    /// (e.g. `CLV_SERVER__PORT=9090`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("model.artifact_path", "model/clv_model.json")?
            .set_default("model.features_path", "model/selected_features.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("CLV").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
