use serde::{Deserialize, Serialize};

/// Request body for the analyze endpoint. The language is forwarded as
/// given; the backend owns any enumeration check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_context: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(code: String, language: String) -> Self {
        Self {
            code,
            language,
            project_context: None,
        }
    }

    pub fn with_context(code: String, language: String, project_context: Option<String>) -> Self {
        Self {
            code,
            language,
            project_context,
        }
    }
}
