use serde::{Deserialize, Serialize};
use crate::enums::score_tier::ScoreTier;
use crate::structs::best_practice::BestPractice;
use crate::structs::performance_issue::PerformanceIssue;
use crate::structs::security_issue::SecurityIssue;
use crate::structs::suggestion::Suggestion;

/// One analysis result as returned by the backend. List order carries no
/// meaning; the overall score is opaque and backend-supplied, independent of
/// list sizes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodeAnalysisResult {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub security_issues: Vec<SecurityIssue>,
    #[serde(default)]
    pub performance_issues: Vec<PerformanceIssue>,
    #[serde(default)]
    pub best_practices: Vec<BestPractice>,
    /// 0-100 inclusive.
    pub overall_score: u8,
}

impl CodeAnalysisResult {
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.overall_score)
    }

    pub fn total_findings(&self) -> usize {
        self.suggestions.len()
            + self.security_issues.len()
            + self.performance_issues.len()
            + self.best_practices.len()
    }
}
