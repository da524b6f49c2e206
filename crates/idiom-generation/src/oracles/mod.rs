//! Generation oracle backends.

pub mod chat;
pub mod mock;

pub use chat::ChatCompletionsOracle;
pub use mock::MockOracle;

use idiom_core::config::GenerationConfig;
use idiom_core::errors::{ConfigError, IdiomResult};
use idiom_core::traits::IGenerationOracle;

/// Build the oracle named by `config.provider`.
pub fn create_oracle(config: &GenerationConfig) -> IdiomResult<Box<dyn IGenerationOracle>> {
    match config.provider.as_str() {
        "chat" => Ok(Box::new(ChatCompletionsOracle::from_config(config)?)),
        "mock" => Ok(Box::new(MockOracle::new())),
        other => Err(ConfigError::UnknownProvider {
            component: "generation".to_string(),
            name: other.to_string(),
        }
        .into()),
    }
}
