//! # VibeLens
//!
//! Turn a photo into an entire vibe. A minimal single-page demo service:
//! the client page uploads an image and the server answers with a mocked
//! analysis result - a color palette, descriptive words, a caption, and an
//! interior style suggestion. No real image analysis happens anywhere.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vibelens::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/vibelens.yaml").await?;
//!     let service = Service::new(config)?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::{
    mock_result, AnalysisResult, AnalysisService, Interior, PaletteColor, ResultMeta,
};
pub use crate::utils::error::{Result, VibeLensError};

use tracing::info;

/// The assembled VibeLens service
pub struct Service {
    server: server::HttpServer,
}

impl Service {
    /// Create a new service instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new service instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { server })
    }

    /// Run the service
    pub async fn run(self) -> Result<()> {
        info!("Starting VibeLens service");

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
