//! Cloud API embedding provider.
//!
//! HTTP client for OpenAI-compatible `/v1/embeddings` endpoints, with
//! retry and exponential backoff.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use idiom_core::errors::{EmbeddingError, IdiomResult};
use idiom_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default endpoint when none is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Cloud API embedding provider.
pub struct ApiProvider {
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    client: reqwest::blocking::Client,
    available: AtomicBool,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(
        model: String,
        api_key: String,
        endpoint: Option<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> IdiomResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                model: model.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            model,
            api_key,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            dimensions,
            client,
            available: AtomicBool::new(true),
            max_retries: 3,
        })
    }

    /// Send an embedding request with retry and exponential backoff.
    fn request_embeddings(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                std::thread::sleep(delay);
                debug!(attempt, "retrying API embedding request");
            }

            match self.send_request(texts) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "API embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        self.available.store(false, Ordering::Relaxed);
        Err(last_err
            .unwrap_or_else(|| EmbeddingError::InferenceFailed {
                reason: "all retries exhausted".to_string(),
            })
            .into())
    }

    fn send_request(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("API returned {status}: {body}"),
            });
        }

        let mut resp: EmbedResponse =
            response.json().map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("JSON parse error: {e}"),
            })?;

        // The API may return rows out of order; `index` is authoritative.
        resp.data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));
        Ok(resp.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Reset availability (e.g., after a config change or health check).
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> IdiomResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
