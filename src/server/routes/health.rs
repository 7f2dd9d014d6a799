//! Health check and status endpoints

use crate::server::routes::ApiResponse;
use actix_web::{web, HttpResponse, Result as ActixResult};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health status payload
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    /// Service status
    pub status: Cow<'static, str>,
    /// Current timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Service version
    pub version: Cow<'static, str>,
}

/// Basic health check endpoint
///
/// Returns a simple health status indicating if the service is running.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Version information endpoint
pub async fn version_info() -> ActixResult<HttpResponse> {
    debug!("Version info requested");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
    })))
}
