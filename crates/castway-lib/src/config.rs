//! Gateway configuration.
//!
//! Loaded once at startup from `config/<env>.json` and shared with the
//! handlers through the router state — never re-read on a request path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub script_service: ServiceConfig,
    pub audio_service: ServiceConfig,
}

/// Listen address for the gateway itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Base URL of a downstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub url: String,
}

impl Config {
    /// Load `config/<env>.json` relative to the working directory.
    pub fn load_env(env: &str) -> Result<Self, GatewayError> {
        Self::load_path(Path::new("config").join(format!("{env}.json")))
    }

    /// Load a specific configuration file.
    pub fn load_path(path: impl Into<PathBuf>) -> Result<Self, GatewayError> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            GatewayError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            GatewayError::Config(format!("cannot parse {}: {e}", path.display()))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            script_service: ServiceConfig {
                url: "http://localhost:8001".to_string(),
            },
            audio_service: ServiceConfig {
                url: "http://localhost:8002".to_string(),
            },
        }
    }
}
