use serde::{Deserialize, Serialize};

use super::{defaults, CachePolicy};

/// Generation oracle and retry loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Oracle: "chat" (OpenAI-compatible chat completions) or "mock".
    pub provider: String,
    /// Chat completions endpoint.
    pub endpoint: String,
    /// Model name sent to the oracle.
    pub model: String,
    /// Environment variable holding the oracle API key.
    pub api_key_env: String,
    /// Maximum output length budget per oracle call.
    pub max_output_tokens: usize,
    /// Per-call oracle timeout.
    pub timeout_secs: u64,
    /// Attempts per `find_idiom` call when the caller does not specify.
    pub max_attempts: usize,
    /// Eviction policy for accepted (situation -> answer) pairs.
    pub result_cache: CachePolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_GENERATION_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_GENERATION_API_KEY_ENV.to_string(),
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            result_cache: CachePolicy::unbounded(),
        }
    }
}
