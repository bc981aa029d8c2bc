use crate::models::{HELLO_MESSAGE, HelloMessage};
use axum::{Json, http::StatusCode};

/// `/api/hello` handler - Fixed JSON greeting
///
/// Responds 200 with `{"message":"Hello from backend"}` regardless of
/// method, headers, or body.
pub async fn hello_handler() -> (StatusCode, Json<HelloMessage>) {
    (
        StatusCode::OK,
        Json(HelloMessage {
            message: HELLO_MESSAGE.to_string(),
        }),
    )
}
