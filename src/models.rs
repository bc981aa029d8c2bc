use serde::{Deserialize, Serialize};

/// Body of the `/api/hello` response
#[derive(Serialize, Deserialize)]
pub struct HelloMessage {
    pub message: String,
}

/// Body of every non-`/api/hello` response
pub const FALLBACK_BODY: &str = "Backend running";

pub const HELLO_MESSAGE: &str = "Hello from backend";
