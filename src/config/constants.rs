pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the configured backend address.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// History snippets longer than this are cut and marked with an ellipsis.
pub const SNIPPET_PREVIEW_LIMIT: usize = 100;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;
