use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Check if HTTP logging middleware is enabled via environment variable
/// Defaults to true if not set
fn is_http_logging_enabled() -> bool {
    std::env::var("ENABLE_HTTP_LOGGING")
        .ok()
        .and_then(|s| s.parse::<bool>().ok())
        .unwrap_or(true)
}

/// HTTP logging middleware
///
/// Only captures method, path, status and duration; no bodies.
pub async fn http_logging_middleware(request: Request, next: Next) -> Response {
    if !is_http_logging_enabled() {
        return next.run(request).await;
    }

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.as_u16() >= 400 {
        log::error!(
            "HTTP Error: {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else {
        log::info!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    }

    response
}
