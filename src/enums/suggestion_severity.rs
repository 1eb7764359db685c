use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum SuggestionSeverity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "error")]
    Error,
}

impl SuggestionSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Info => "💡",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }
}

impl Default for SuggestionSeverity {
    fn default() -> Self {
        SuggestionSeverity::Info
    }
}
