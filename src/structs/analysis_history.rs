use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::analysis_result::CodeAnalysisResult;

/// One past analysis session. Immutable once created; timestamp-descending
/// ordering is applied at render time, never stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisHistory {
    pub id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub code_snippet: String,
    pub language: String,
    pub result: CodeAnalysisResult,
}

impl AnalysisHistory {
    pub fn record(user_id: &str, code_snippet: String, language: String, result: CodeAnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            code_snippet,
            language,
            result,
        }
    }
}
