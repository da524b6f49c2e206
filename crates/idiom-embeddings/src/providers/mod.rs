//! Provider registry.
//!
//! The provider is chosen explicitly by config. There is no silent
//! fallback: vectors from a different model are not comparable with the
//! corpus vectors, so an unusable provider is a startup error.

pub mod api_provider;
pub mod hashed;
pub mod ollama_provider;

#[cfg(feature = "fastembed")]
pub mod fastembed_provider;

pub use api_provider::ApiProvider;
pub use hashed::HashedNgramProvider;
pub use ollama_provider::OllamaProvider;

#[cfg(feature = "fastembed")]
pub use fastembed_provider::FastEmbedProvider;

use std::time::Duration;

use idiom_core::config::EmbeddingConfig;
use idiom_core::errors::{ConfigError, EmbeddingError, IdiomResult};
use idiom_core::traits::IEmbeddingProvider;
use tracing::info;

/// Environment variable read by the "api" provider when none is configured.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Create the configured provider, returning it boxed.
pub fn create_provider(config: &EmbeddingConfig) -> IdiomResult<Box<dyn IEmbeddingProvider>> {
    let timeout = Duration::from_secs(config.timeout_secs);
    match config.provider.as_str() {
        "hashed" => {
            info!(provider = "hashed", dims = config.dimensions, "using hashed n-gram provider");
            Ok(Box::new(HashedNgramProvider::new(config.dimensions)))
        }
        "ollama" => {
            let provider = OllamaProvider::new(
                config.model.clone(),
                config.dimensions,
                config.endpoint.clone(),
                timeout,
            )?;
            if !provider.health_check() {
                return Err(EmbeddingError::ProviderUnavailable {
                    provider: format!("ollama:{}", config.model),
                }
                .into());
            }
            info!(provider = "ollama", model = %config.model, "embedding provider connected");
            Ok(Box::new(provider))
        }
        "api" => {
            let var = config
                .api_key_env
                .clone()
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
            let api_key =
                std::env::var(&var).map_err(|_| ConfigError::MissingEnvVar { var: var.clone() })?;
            info!(provider = "api", model = %config.model, "embedding provider configured");
            Ok(Box::new(ApiProvider::new(
                config.model.clone(),
                api_key,
                config.endpoint.clone(),
                config.dimensions,
                timeout,
            )?))
        }
        #[cfg(feature = "fastembed")]
        "fastembed" => {
            let provider = FastEmbedProvider::load(&config.model)?;
            info!(provider = "fastembed", model = %config.model, "embedding provider loaded");
            Ok(Box::new(provider))
        }
        #[cfg(not(feature = "fastembed"))]
        "fastembed" => Err(ConfigError::UnknownProvider {
            component: "embedding".to_string(),
            name: "fastembed (built without the `fastembed` feature)".to_string(),
        }
        .into()),
        other => Err(ConfigError::UnknownProvider {
            component: "embedding".to_string(),
            name: other.to_string(),
        }
        .into()),
    }
}
