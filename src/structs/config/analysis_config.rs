use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Which result categories are rendered and which languages the CLI offers.
/// None of this reaches the backend; the toggles filter rendering only.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_enabled")]
    pub security_scan: bool,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub performance_scan: bool,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub best_practices_scan: bool,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub style_scan: bool,

    /// Results scoring below this get a warning line in the report.
    #[serde(default = "ConfigHelper::default_score_threshold")]
    pub score_threshold: u8,

    #[serde(default = "ConfigHelper::default_languages")]
    pub languages: Vec<String>,
}

impl AnalysisConfig {
    /// Whether a language is in the configured offering. The client still
    /// forwards whatever string it is given; this only drives a warning.
    pub fn offers_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.eq_ignore_ascii_case(language))
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            security_scan: true,
            performance_scan: true,
            best_practices_scan: true,
            style_scan: true,
            score_threshold: ConfigHelper::default_score_threshold(),
            languages: ConfigHelper::default_languages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offered_languages_match_case_insensitively() {
        let config = AnalysisConfig::default();
        assert!(config.offers_language("javascript"));
        assert!(config.offers_language("Python"));
        assert!(!config.offers_language("cobol"));
    }
}
