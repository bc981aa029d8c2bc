// Route path constants - single source of truth for all API paths

/// Matched against the full request target (path plus query string), so
/// `/api/hello?x=1` and `/api/hello/` do NOT match.
pub const HELLO: &str = "/api/hello";
