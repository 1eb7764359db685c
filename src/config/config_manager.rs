use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::API_BASE_URL_ENV;
use crate::errors::{NeuralintError, NeuralintResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join("neuralint/config.toml"))
            .unwrap_or_default()
    }

    /// Load the config file if present, fall back to defaults otherwise,
    /// then apply the API_BASE_URL environment override on top.
    pub fn load() -> NeuralintResult<Config> {
        let mut config = Self::load_from_path(&Self::config_path())?;
        Self::apply_base_url_override(&mut config, env::var(API_BASE_URL_ENV).ok());
        Ok(config)
    }

    /// A non-blank override replaces the configured backend address;
    /// a missing or whitespace-only value leaves it alone.
    pub fn apply_base_url_override(config: &mut Config, override_value: Option<String>) {
        if let Some(base_url) = override_value {
            if !base_url.trim().is_empty() {
                log::info!("🌐 Using backend address from {}: {}", API_BASE_URL_ENV, base_url);
                config.api.base_url = base_url;
            }
        }
    }

    pub fn load_from_path(path: &Path) -> NeuralintResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| NeuralintError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| NeuralintError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;

        Ok(config)
    }

    pub fn create_sample_config() -> NeuralintResult<()> {
        let sample_config = r#"# NeuraLint CLI Configuration

[api]
# Backend address; the API_BASE_URL environment variable overrides this.
base_url = "http://localhost:8000/api"

# Give up on the analyze call after this many seconds.
timeout_secs = 60

[analysis]
# Which finding categories to render. Nothing here is sent to the backend.
security_scan = true
performance_scan = true
best_practices_scan = true
style_scan = true

# Warn when a result scores below this.
score_threshold = 70

# Languages offered for analysis.
languages = ["javascript", "typescript", "python", "java"]

[output]
verbose = false
history_limit = 20
"#;

        let config_path = Self::config_path();
        if config_path.as_os_str().is_empty() {
            return Err(NeuralintError::system_error(
                "config init",
                "could not determine the home directory",
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, sample_config)?;
        println!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    /// Collect every problem, not just the first.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.api.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        } else if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
            errors.push(format!(
                "api.base_url must be an http(s) URL, got: {}",
                config.api.base_url
            ));
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.analysis.score_threshold > 100 {
            errors.push(format!(
                "analysis.score_threshold must be 0-100, got: {}",
                config.analysis.score_threshold
            ));
        }

        if config.analysis.languages.is_empty() {
            errors.push("analysis.languages must list at least one language".to_string());
        }

        if config.output.history_limit == 0 {
            errors.push("output.history_limit must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
