//! OpenAI-compatible chat completions oracle.
//!
//! Defaults to the Cerebras endpoint. The API key is read from the
//! environment variable named in `generation.api_key_env` when the oracle
//! is built, never from config.

use std::time::Duration;

use idiom_core::config::GenerationConfig;
use idiom_core::errors::{ConfigError, GenerationError, IdiomResult};
use idiom_core::traits::IGenerationOracle;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct ChatCompletionsOracle {
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsOracle {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> IdiomResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout,
            client,
        })
    }

    pub fn from_config(config: &GenerationConfig) -> IdiomResult<Self> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| ConfigError::MissingEnvVar {
                var: config.api_key_env.clone(),
            })?;
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn send(&self, prompt: &str, max_output_tokens: usize) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: max_output_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::RequestFailed {
                reason: format!("HTTP {status}: {}", truncate(&body, 200)),
            });
        }

        let body: ChatResponse = response.json().map_err(|e| self.decode_error(e))?;
        extract_content(body)
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            GenerationError::RequestFailed {
                reason: e.to_string(),
            }
        }
    }

    fn decode_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            return self.transport_error(e);
        }
        GenerationError::MalformedResponse {
            reason: e.to_string(),
        }
    }
}

impl IGenerationOracle for ChatCompletionsOracle {
    fn generate(&self, prompt: &str, max_output_tokens: usize) -> IdiomResult<String> {
        debug!(model = %self.model, max_output_tokens, "calling generation oracle");
        Ok(self.send(prompt, max_output_tokens)?)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// First choice's message text, trimmed.
fn extract_content(body: ChatResponse) -> Result<String, GenerationError> {
    let content = body
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    if content.is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(content)
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<String, GenerationError> {
        extract_content(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn first_choice_content() {
        let out = parse(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"  对症下药\nTo prescribe\nExplain.  "}}]}"#,
        )
        .unwrap();
        assert_eq!(out, "对症下药\nTo prescribe\nExplain.");
    }

    #[test]
    fn missing_or_blank_content_is_empty_response() {
        assert!(matches!(parse(r#"{"choices":[]}"#), Err(GenerationError::EmptyResponse)));
        assert!(matches!(parse(r#"{}"#), Err(GenerationError::EmptyResponse)));
        assert!(matches!(
            parse(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(
            parse(r#"{"choices":[{"message":{"content":"  \n "}}]}"#),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn request_shape() {
        let request = ChatRequest {
            model: "gpt-oss-120b",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: 256,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-oss-120b");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
        assert_eq!(value["max_tokens"], 256);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("对症下药", 2), "对症");
        assert_eq!(truncate("short", 200), "short");
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        let oracle = ChatCompletionsOracle::new(
            "http://127.0.0.1:9/v1/chat/completions",
            "test-model",
            "key",
            Duration::from_millis(500),
        )
        .unwrap();
        assert!(oracle.generate("prompt", 16).is_err());
        assert_eq!(oracle.name(), "test-model");
    }

    #[test]
    #[ignore = "requires network access and CEREBRAS_API_KEY"]
    fn live_completion() {
        let oracle = ChatCompletionsOracle::from_config(&GenerationConfig::default()).unwrap();
        let text = oracle
            .generate(&crate::prompt::build_prompt("I keep changing my mind"), 1024)
            .unwrap();
        assert!(!text.is_empty());
    }
}
