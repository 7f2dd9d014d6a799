//! Test fixtures and payload builders

use vibelens::config::Config;

/// Boundary used by the multipart builders below
pub const BOUNDARY: &str = "----vibelens-test-boundary";

/// Content-Type header value matching [`BOUNDARY`]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Build a multipart body with a single `file` field
pub fn multipart_file_body(filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            BOUNDARY, filename, content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Build a multipart body with no `file` field at all
pub fn multipart_without_file() -> Vec<u8> {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nno image here\r\n--{b}--\r\n",
        b = BOUNDARY
    )
    .into_bytes()
}

/// A tiny PNG-ish byte blob; the endpoint never parses it
pub fn sample_image_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0]
}

/// Config with the content-type gate enabled
pub fn strict_config() -> Config {
    let mut config = Config::default();
    config.analysis.require_image_content_type = true;
    config
}

/// Config whose responses carry no meta block
pub fn no_latency_config() -> Config {
    let mut config = Config::default();
    config.analysis.simulated_latency_ms = None;
    config
}
