use std::sync::Arc;
use crate::enums::session_status::SessionStatus;
use crate::errors::{NeuralintError, NeuralintResult};
use crate::structs::analysis_result::CodeAnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::traits::analysis_backend::AnalysisBackend;

/// Single-flight analysis workflow: Idle, submit moves to Pending, completion
/// moves back to Idle carrying either a result or an error. Each submission
/// gets a generation number and a completion is applied only while its
/// generation is still current, so of two overlapping submissions only the
/// later one's outcome is ever observable.
pub struct AnalysisSession {
    backend: Arc<dyn AnalysisBackend>,
    generation: u64,
    in_flight: Option<u64>,
    last_result: Option<CodeAnalysisResult>,
    last_error: Option<NeuralintError>,
}

impl AnalysisSession {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            generation: 0,
            in_flight: None,
            last_result: None,
            last_error: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.in_flight.is_some() {
            SessionStatus::Pending
        } else {
            SessionStatus::Idle
        }
    }

    pub fn last_result(&self) -> Option<&CodeAnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&NeuralintError> {
        self.last_error.as_ref()
    }

    /// Start a new submission. Any prior result or error is discarded
    /// immediately, and any still-pending submission is superseded.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.last_result = None;
        self.last_error = None;
        self.generation
    }

    /// Apply a submission's outcome. Returns false when the submission has
    /// been superseded, in which case the outcome is dropped.
    pub fn complete(&mut self, generation: u64, outcome: NeuralintResult<CodeAnalysisResult>) -> bool {
        if self.in_flight != Some(generation) {
            log::debug!("Ignoring superseded analysis completion (generation {})", generation);
            return false;
        }

        self.in_flight = None;
        match outcome {
            Ok(result) => self.last_result = Some(result),
            Err(error) => self.last_error = Some(error),
        }
        true
    }

    /// Convenience wrapper driving begin/complete around one backend call.
    pub async fn submit(&mut self, request: AnalyzeRequest) -> NeuralintResult<CodeAnalysisResult> {
        let generation = self.begin();
        let backend = Arc::clone(&self.backend);
        let outcome = backend.analyze(&request).await;
        self.complete(generation, outcome.clone());
        outcome
    }
}
