//! Analyze endpoint integration tests
//!
//! These tests drive the HTTP surface with `actix_web::test` and verify the
//! contract: the endpoint succeeds regardless of payload, the body matches
//! the Analysis Result schema, and the optional content-type gate only
//! rejects when enabled.

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use vibelens::config::Config;
    use vibelens::server::routes;
    use vibelens::server::state::AppState;
    use vibelens::AnalysisResult;

    use crate::common::fixtures;

    macro_rules! init_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($config)))
                    .configure(routes::pages::configure_routes)
                    .configure(routes::analyze::configure_routes)
                    .configure(routes::health::configure_routes),
            )
            .await
        };
    }

    fn analyze_request(body: Vec<u8>) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/analyze")
            .insert_header(("content-type", fixtures::multipart_content_type()))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_analyze_returns_mock_for_image_upload() {
        let app = init_app!(Config::default());

        let body = fixtures::multipart_file_body(
            "sunset.png",
            "image/png",
            &fixtures::sample_image_bytes(),
        );
        let resp = test::call_service(&app, analyze_request(body).to_request()).await;
        assert!(resp.status().is_success());

        let result: AnalysisResult = test::read_body_json(resp).await;
        assert_eq!(result.palette.len(), 6);
        assert_eq!(result.vibe_words.len(), 5);
        assert_eq!(result.caption, "A quiet sky spilling warmth into the sea.");
        assert_eq!(result.interior.style, "Coastal Minimal");
        assert_eq!(result.interior.keywords.len(), 3);
        assert_eq!(result.meta.unwrap().latency_ms, Some(120));
    }

    #[actix_web::test]
    async fn test_analyze_identical_for_any_upload() {
        let app = init_app!(Config::default());

        let first = fixtures::multipart_file_body("a.png", "image/png", b"aaaa");
        let second = fixtures::multipart_file_body("b.jpg", "image/jpeg", b"completely different");

        let resp_a = test::call_service(&app, analyze_request(first).to_request()).await;
        let resp_b = test::call_service(&app, analyze_request(second).to_request()).await;

        let body_a: AnalysisResult = test::read_body_json(resp_a).await;
        let body_b: AnalysisResult = test::read_body_json(resp_b).await;
        assert_eq!(body_a, body_b);
    }

    #[actix_web::test]
    async fn test_analyze_accepts_multipart_without_file() {
        let app = init_app!(Config::default());

        let resp =
            test::call_service(&app, analyze_request(fixtures::multipart_without_file()).to_request())
                .await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_analyze_accepts_empty_body() {
        let app = init_app!(Config::default());

        // No multipart content type, no body at all
        let req = test::TestRequest::post().uri("/api/analyze").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let result: AnalysisResult = test::read_body_json(resp).await;
        assert_eq!(result.palette.len(), 6);
    }

    #[actix_web::test]
    async fn test_content_type_gate_rejects_non_image() {
        let app = init_app!(fixtures::strict_config());

        let body = fixtures::multipart_file_body("notes.txt", "text/plain", b"hello");
        let resp = test::call_service(&app, analyze_request(body).to_request()).await;
        assert_eq!(resp.status().as_u16(), 400);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("text/plain"));
    }

    #[actix_web::test]
    async fn test_content_type_gate_accepts_images() {
        let app = init_app!(fixtures::strict_config());

        let body = fixtures::multipart_file_body(
            "sunset.jpg",
            "image/jpeg",
            &fixtures::sample_image_bytes(),
        );
        let resp = test::call_service(&app, analyze_request(body).to_request()).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_meta_absent_when_latency_unset() {
        let app = init_app!(fixtures::no_latency_config());

        let body = fixtures::multipart_file_body(
            "sunset.png",
            "image/png",
            &fixtures::sample_image_bytes(),
        );
        let resp = test::call_service(&app, analyze_request(body).to_request()).await;

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json.get("meta").is_none());
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = init_app!(Config::default());

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_version_endpoint() {
        let app = init_app!(Config::default());

        let req = test::TestRequest::get().uri("/version").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["name"], "vibelens");
    }

    #[actix_web::test]
    async fn test_index_serves_client_page() {
        let app = init_app!(Config::default());

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("VibeLens"));
        assert!(html.contains(r#"accept="image/*""#));
    }
}
