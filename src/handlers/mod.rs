pub mod fallback;
pub mod hello;

pub use fallback::fallback_handler;
pub use hello::hello_handler;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::routes;

/// Maps every inbound request to one of the two fixed responses.
///
/// The comparison uses the full request target (path plus query string),
/// case-sensitive and without any normalization, so `/api/hello?x=1`,
/// `/api/hello/` and `/API/HELLO` all fall through to the fallback.
/// The method is ignored. No input produces a non-200 status.
pub async fn dispatch(uri: Uri) -> Response {
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    tracing::debug!("Dispatching request for {}", target);

    if target == routes::HELLO {
        hello_handler().await.into_response()
    } else {
        fallback_handler().await.into_response()
    }
}
