use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "ConfigHelper::default_history_limit")]
    pub history_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            history_limit: ConfigHelper::default_history_limit(),
        }
    }
}
