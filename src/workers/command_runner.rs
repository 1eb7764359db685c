use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::http_backend::HttpBackend;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{NeuralintError, NeuralintResult};
use crate::helpers::language::detect_language;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_logger::ReportLogger;
use crate::services::analysis_session::AnalysisSession;
use crate::services::history_store::HistoryStore;
use crate::structs::analysis_history::AnalysisHistory;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;
use crate::structs::user::User;

/// Neutral spinner sign-off on failure; the user-facing message is printed
/// once, by the central error handler.
const ANALYZE_FAILED_LABEL: &str = "Analysis failed";

pub struct CommandRunner {
    start_time: Option<Instant>,
    history: HistoryStore,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            history: HistoryStore::new(),
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> NeuralintResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Analyze { file, language, context } => self.analyze_command(file, language, context).await,
            Commands::Validate => self.validate_command().await,
            Commands::History { limit } => self.history_command(limit).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> NeuralintResult<()> {
        log::info!("🚀 Initializing neuralint configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Run 'neuralint validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e.technical_details());
                Err(e)
            }
        }
    }

    async fn analyze_command(
        &mut self,
        file: Option<PathBuf>,
        language: Option<String>,
        context: Option<String>,
    ) -> NeuralintResult<()> {
        let config = ConfigManager::load()?;
        let (code, language) = Self::read_input(file, language)?;

        log::info!("🔍 Submitting {} code for analysis ({} bytes)", language, code.len());

        if !config.analysis.offers_language(&language) {
            log::warn!(
                "⚠️ '{}' is not in the configured language list ({})",
                language,
                config.analysis.languages.join(", ")
            );
        }

        if let Some(summary) = Self::request_summary(&config, &language, code.len()) {
            println!("{}", summary);
        }

        let backend = HttpBackend::new(config.api.base_url.clone(), config.api.timeout_secs)?;
        let mut session = AnalysisSession::new(Arc::new(backend));
        let request = AnalyzeRequest::with_context(code.clone(), language.clone(), context);

        let mut spinner = AnimatedLogger::new("Analyzing your code with AI...");
        spinner.start();

        match session.submit(request).await {
            Ok(result) => {
                spinner.stop("Analysis complete").await;
                ReportLogger::print_report(&result, &config.analysis);

                let user = User::current();
                self.history.record(AnalysisHistory::record(&user.id, code, language, result));
                Ok(())
            }
            Err(e) => {
                spinner.error(ANALYZE_FAILED_LABEL).await;
                Err(e)
            }
        }
    }

    async fn validate_command(&self) -> NeuralintResult<()> {
        log::info!("🔧 Validating configuration...");

        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("🌐 Backend address: {}", config.api.base_url);
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    eprintln!("❌ {}", error);
                }
                Err(NeuralintError::config_error(
                    &format!("{} configuration problems found", errors.len()),
                    None,
                    Some("fix the listed fields, or re-run 'neuralint init' for a fresh config"),
                ))
            }
        }
    }

    async fn history_command(&self, limit: Option<usize>) -> NeuralintResult<()> {
        let config = ConfigManager::load()?;
        let limit = Self::effective_history_limit(limit, &config);
        ReportLogger::print_history(&self.history.newest_first(), limit);
        Ok(())
    }

    /// An explicit --limit wins; otherwise the configured history limit.
    fn effective_history_limit(requested: Option<usize>, config: &Config) -> usize {
        requested.unwrap_or(config.output.history_limit)
    }

    /// Extra request detail shown only when output.verbose is set.
    fn request_summary(config: &Config, language: &str, bytes: usize) -> Option<String> {
        if !config.output.verbose {
            return None;
        }

        Some(format!(
            "🌐 Backend: {}\n📄 Submitting {} bytes of {} code",
            config.api.base_url, bytes, language
        ))
    }

    /// Code from the given file or from stdin. The language falls back to
    /// extension detection for files; stdin input must state it explicitly.
    fn read_input(file: Option<PathBuf>, language: Option<String>) -> NeuralintResult<(String, String)> {
        match file {
            Some(path) => {
                let code = std::fs::read_to_string(&path).map_err(|e| {
                    NeuralintError::input_error(
                        &path.display().to_string(),
                        "a readable source file",
                        &format!("check the path: {}", e),
                    )
                })?;

                let language = match language.or_else(|| detect_language(&path).map(|l| l.to_string())) {
                    Some(language) => language,
                    None => {
                        return Err(NeuralintError::input_error(
                            &path.display().to_string(),
                            "a recognized file extension or an explicit --language",
                            "pass --language, e.g. --language javascript",
                        ))
                    }
                };

                Ok((code, language))
            }
            None => {
                let language = language.ok_or_else(|| {
                    NeuralintError::input_error(
                        "<stdin>",
                        "--language when reading from stdin",
                        "pass --language, e.g. --language python",
                    )
                })?;

                let mut code = String::new();
                std::io::stdin().read_to_string(&mut code)?;
                Ok((code, language))
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_input_detects_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.js");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "var x = 10;").unwrap();

        let (code, language) = CommandRunner::read_input(Some(path), None).unwrap();
        assert_eq!(code, "var x = 10;");
        assert_eq!(language, "javascript");
    }

    #[test]
    fn explicit_language_wins_over_detection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.js");
        std::fs::write(&path, "print(1)").unwrap();

        let (_, language) = CommandRunner::read_input(Some(path), Some("python".to_string())).unwrap();
        assert_eq!(language, "python");
    }

    #[test]
    fn unknown_extension_without_language_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.xyz");
        std::fs::write(&path, "???").unwrap();

        let err = CommandRunner::read_input(Some(path), None).unwrap_err();
        assert!(matches!(err, NeuralintError::UserInputError { .. }));
    }

    #[test]
    fn history_limit_falls_back_to_the_configured_value() {
        let mut config = Config::default();
        config.output.history_limit = 7;

        assert_eq!(CommandRunner::effective_history_limit(None, &config), 7);
        assert_eq!(CommandRunner::effective_history_limit(Some(3), &config), 3);
    }

    #[test]
    fn request_summary_is_gated_by_the_verbose_flag() {
        let mut config = Config::default();
        assert!(CommandRunner::request_summary(&config, "javascript", 11).is_none());

        config.output.verbose = true;
        let summary = CommandRunner::request_summary(&config, "javascript", 11).unwrap();
        assert!(summary.contains("http://localhost:8000/api"));
        assert!(summary.contains("11 bytes of javascript code"));
    }

    #[test]
    fn spinner_failure_label_is_not_the_user_facing_message() {
        // The user message is printed once, by the central error handler.
        assert_ne!(ANALYZE_FAILED_LABEL, crate::errors::ANALYSIS_FAILED_MESSAGE);
    }
}
