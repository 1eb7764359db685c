use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BestPractice {
    pub id: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub code_snippet: String,
    pub suggested_fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
