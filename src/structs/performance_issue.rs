use serde::{Deserialize, Serialize};
use crate::enums::impact_level::ImpactLevel;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PerformanceIssue {
    pub id: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub impact: ImpactLevel,
    pub code_snippet: String,
    pub suggested_fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_improvement: Option<String>,
}
