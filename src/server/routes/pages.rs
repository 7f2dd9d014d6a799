//! Client page routes
//!
//! The single-page client is embedded at compile time so the binary works
//! from any working directory; the `/static` mount in the server serves the
//! same directory from disk for anything else dropped there.

use actix_web::{web, HttpResponse, Result as ActixResult};
use tracing::debug;

/// The client view, compiled into the binary
pub const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Configure page routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

/// Serve the client page
pub async fn index() -> ActixResult<HttpResponse> {
    debug!("Serving client page");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML))
}
