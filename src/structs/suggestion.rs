use serde::{Deserialize, Serialize};
use crate::enums::suggestion_severity::SuggestionSeverity;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: SuggestionSeverity,
    pub code_snippet: String,
    pub suggested_fix: String,
}
