use crate::errors::IdiomResult;

/// Opaque text generator: prompt in, free text out.
pub trait IGenerationOracle: Send + Sync {
    /// Generate a completion for `prompt`, bounded by `max_output_tokens`.
    fn generate(&self, prompt: &str, max_output_tokens: usize) -> IdiomResult<String>;

    fn name(&self) -> &str;
}
