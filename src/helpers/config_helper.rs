use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_HISTORY_LIMIT};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        60
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_score_threshold() -> u8 {
        70
    }

    pub fn default_languages() -> Vec<String> {
        vec![
            "javascript".to_string(),
            "typescript".to_string(),
            "python".to_string(),
            "java".to_string(),
        ]
    }

    pub fn default_history_limit() -> usize {
        DEFAULT_HISTORY_LIMIT
    }
}
