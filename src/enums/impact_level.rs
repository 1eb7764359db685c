use serde::{Deserialize, Serialize};

/// Performance impact. Ord follows escalation order, so sorting descending
/// puts high impact first in the report.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ImpactLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for ImpactLevel {
    fn default() -> Self {
        ImpactLevel::Medium
    }
}
