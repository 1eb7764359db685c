use async_trait::async_trait;
use crate::errors::NeuralintResult;
use crate::structs::analysis_result::CodeAnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;

/// The analysis engine is an opaque external collaborator. Everything this
/// crate knows about it is one request/response call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> NeuralintResult<CodeAnalysisResult>;
}
