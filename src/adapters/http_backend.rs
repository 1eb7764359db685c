use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::errors::{NeuralintError, NeuralintResult};
use crate::structs::analysis_result::CodeAnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::traits::analysis_backend::AnalysisBackend;

/// Reqwest-backed analysis backend. One POST per invocation, no retry and no
/// caching of identical requests; every failure mode collapses into a
/// transport error carrying the technical cause for the log.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String, timeout_secs: u64) -> NeuralintResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NeuralintError::system_error("HTTP client setup", &e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> NeuralintResult<CodeAnalysisResult> {
        let url = self.endpoint_url();

        let response = match self.client.post(&url).json(request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Network error during analyze request to {}: {}", url, e);
                return Err(NeuralintError::transport_error(
                    "analyze",
                    Some(&url),
                    e.status().map(|s| s.as_u16()),
                    &e.to_string(),
                ));
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<CodeAnalysisResult>().await {
                Ok(result) => Ok(result),
                Err(e) => {
                    // Schema mismatch counts as a transport failure, not a
                    // crash on missing fields.
                    log::error!("Malformed analyze response from {}: {}", url, e);
                    Err(NeuralintError::transport_error(
                        "analyze",
                        Some(&url),
                        Some(StatusCode::OK.as_u16()),
                        &format!("malformed response body: {}", e),
                    ))
                }
            },
            status => {
                let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_string());
                log::error!("Analyze request to {} failed with status {}: {}", url, status, body);
                Err(NeuralintError::transport_error(
                    "analyze",
                    Some(&url),
                    Some(status.as_u16()),
                    &format!("unexpected status {}", status),
                ))
            }
        }
    }
}
