use crate::models::FALLBACK_BODY;
use axum::http::{HeaderName, StatusCode, header};

/// Catch-all handler - Fixed plain-text response
///
/// Every request that is not exactly `/api/hello` ends up here and gets
/// 200 with `Backend running`. The content type is set explicitly so the
/// wire value is `text/plain` without a charset suffix.
pub async fn fallback_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        FALLBACK_BODY,
    )
}
