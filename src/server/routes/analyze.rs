//! Image analysis endpoint
//!
//! Accepts a multipart upload and returns the canned analysis result. The
//! upload is drained but never stored; the body may be malformed or missing
//! entirely and the endpoint still answers with the mock payload. The one
//! optional check is the content-type gate, off by default.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Result as ActixResult};
use futures::StreamExt;
use tracing::{debug, info};

/// Configure analysis routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/analyze", web::post().to(analyze)));
}

/// Analysis endpoint
///
/// `POST /api/analyze` with a multipart form carrying a `file` field.
/// Unconditionally succeeds with the fixed result; the request body only
/// feeds the request log.
pub async fn analyze(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    info!("Analysis request");

    let mut filename: Option<String> = None;
    let mut upload_size = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                // The body is ignored anyway, so a malformed or absent
                // multipart payload is not an error
                debug!("Ignoring unreadable multipart body: {}", e);
                break;
            }
        };

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "file" => {
                if let Some(cd) = field.content_disposition() {
                    if let Some(fname) = cd.get_filename() {
                        filename = Some(fname.to_string());
                    }
                }

                if state.config.analysis().require_image_content_type {
                    if let Some(ct) = field.content_type() {
                        if ct.type_().as_str() != "image" {
                            let message = format!("Unsupported content type: {}", ct);
                            debug!("{}", message);
                            return Ok(HttpResponse::BadRequest()
                                .json(ApiResponse::<()>::error(message)));
                        }
                    }
                }

                // Drain the upload; only its size is kept
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => upload_size += bytes.len(),
                        Err(e) => {
                            debug!("Ignoring truncated file field: {}", e);
                            break;
                        }
                    }
                }
            }
            _ => {
                // Skip unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let result = state.analyzer.analyze(filename.as_deref(), upload_size);

    Ok(HttpResponse::Ok().json(result))
}
