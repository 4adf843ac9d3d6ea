//! Summarization endpoint HTTP client.

use reqwest::Client;
use tracing::debug;

use ytsum_models::{SummarizeRequest, SummarizeResponse, VideoId};

use crate::error::{ClientError, ClientResult};

/// Configuration for the summarization client.
#[derive(Debug, Clone)]
pub struct SummarizeClientConfig {
    /// Base URL of the summarization service.
    pub base_url: String,
}

impl Default for SummarizeClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl SummarizeClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("YTSUM_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }
}

/// Client for the summarization endpoint.
///
/// Exactly one outbound request per invocation; transport defaults govern
/// timeouts and nothing is retried. The status line is not consulted — the
/// parsed body decides what the caller sees.
pub struct SummarizeClient {
    http: Client,
    config: SummarizeClientConfig,
}

impl SummarizeClient {
    /// Create a new client.
    pub fn new(config: SummarizeClientConfig) -> ClientResult<Self> {
        let http = Client::builder().build().map_err(ClientError::Network)?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(SummarizeClientConfig::from_env())
    }

    /// Submit a video identifier for summarization and parse the JSON reply.
    pub async fn summarize(&self, id: &VideoId) -> ClientResult<SummarizeResponse> {
        let url = format!("{}/summarize", self.config.base_url);
        debug!("posting summarize request to {}", url);

        let request = SummarizeRequest::new(id.as_str());
        let response = self.http.post(&url).json(&request).send().await?;

        let body = response.text().await?;
        let parsed: SummarizeResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
