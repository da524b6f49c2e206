//! Tier 3: MediaWiki title lookup (Wiktionary by default).
//!
//! `GET {endpoint}?action=query&titles={idiom}&format=json`. The response's
//! `query.pages` object is keyed by page id; a negative id (conventionally
//! `"-1"`) or a page carrying `missing` means no such entry.

use std::time::Duration;

use idiom_core::errors::{IdiomResult, VerificationError};
use idiom_core::models::Existence;
use idiom_core::traits::IExistenceOracle;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

pub struct WiktionaryClient {
    client: Client,
    endpoint: String,
}

impl WiktionaryClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str, timeout: Duration) -> IdiomResult<Self> {
        let build_failed = |reason: String| VerificationError::ClientBuildFailed { reason };

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| build_failed(e.to_string()))?,
        );
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| build_failed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn fetch(&self, title: &str) -> Result<Value, String> {
        let url = reqwest::Url::parse_with_params(
            &self.endpoint,
            &[("action", "query"), ("titles", title), ("format", "json")],
        )
        .map_err(|e| format!("invalid endpoint: {e}"))?;

        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                "timed out".to_string()
            } else {
                e.to_string()
            }
        })?;
        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }
        response.json::<Value>().map_err(|e| e.to_string())
    }
}

impl IExistenceOracle for WiktionaryClient {
    fn lookup(&self, title: &str) -> Existence {
        match self.fetch(title) {
            Ok(body) => {
                let existence = parse_lookup_response(&body);
                debug!(title = %title, ?existence, "remote lookup");
                existence
            }
            Err(reason) => Existence::Unknown(reason),
        }
    }

    fn name(&self) -> &str {
        "wiktionary"
    }
}

/// Interpret a MediaWiki `action=query` response.
pub fn parse_lookup_response(body: &Value) -> Existence {
    let Some(pages) = body
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_object)
    else {
        return Existence::Unknown("response has no query.pages".to_string());
    };
    if pages.is_empty() {
        return Existence::Unknown("response has no pages".to_string());
    }

    let missing = pages.iter().any(|(id, page)| {
        id.starts_with('-') || page.get("missing").is_some() || page.get("invalid").is_some()
    });
    if missing {
        Existence::Missing
    } else {
        Existence::Exists
    }
}
