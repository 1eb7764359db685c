use serde::{Deserialize, Serialize};

/// Ord follows escalation order, so sorting descending puts critical first
/// in the report.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SecuritySeverity {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl SecuritySeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "💡",
            Self::Medium => "📋",
            Self::High => "⚠️",
            Self::Critical => "🚨",
        }
    }
}

impl Default for SecuritySeverity {
    fn default() -> Self {
        SecuritySeverity::Medium
    }
}
