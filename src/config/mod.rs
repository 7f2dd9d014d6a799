//! Configuration management for VibeLens
//!
//! This module handles loading and validation of the service configuration.

pub mod analysis;
pub mod server;

pub use analysis::AnalysisConfig;
pub use server::{CorsConfig, ServerConfig};

use crate::utils::error::{Result, VibeLensError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Analysis endpoint configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Directory served at `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| VibeLensError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| VibeLensError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Recognizes `VIBELENS_HOST` and `VIBELENS_PORT`; everything else keeps
    /// its default.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(host) = std::env::var("VIBELENS_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("VIBELENS_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| VibeLensError::Config(format!("Invalid VIBELENS_PORT: {}", port)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.analysis = self.analysis.merge(other.analysis);
        if other.static_dir != default_static_dir() {
            self.static_dir = other.static_dir;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate().map_err(VibeLensError::Config)?;

        if self.static_dir.is_empty() {
            return Err(VibeLensError::Config(
                "static_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get analysis configuration
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }
}

fn default_static_dir() -> String {
    "static".to_string()
}
