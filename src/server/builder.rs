//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, VibeLensError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| VibeLensError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting VibeLens");

    // Auto-load configuration file
    let config_path = "config/vibelens.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!("Configuration file not loaded ({}), using defaults", e);
            Config::default()
        }
    };

    // Environment variables override the file
    let config = config.merge(Config::from_env()?);

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("Endpoints:");
    info!("   GET  /            - Client page");
    info!("   POST /api/analyze - Image analysis (mocked)");
    info!("   GET  /health      - Health check");
    info!("   GET  /version     - Version info");

    server.start().await
}
