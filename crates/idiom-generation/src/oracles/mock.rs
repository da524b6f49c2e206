//! Offline oracle for demos and tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use idiom_core::errors::IdiomResult;
use idiom_core::traits::IGenerationOracle;

/// Canned answer returned by [`MockOracle::new`].
pub const MOCK_RESPONSE: &str =
    "对症下药\nTo prescribe the right medicine\nTo take the right approach to a problem.";

/// Replays scripted responses in order, cycling when exhausted.
pub struct MockOracle {
    responses: Vec<String>,
    calls: AtomicUsize,
}

impl MockOracle {
    /// Always answers 对症下药.
    pub fn new() -> Self {
        Self::scripted(vec![MOCK_RESPONSE.to_string()])
    }

    pub fn scripted(responses: Vec<String>) -> Self {
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl IGenerationOracle for MockOracle {
    fn generate(&self, _prompt: &str, _max_output_tokens: usize) -> IdiomResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.responses.is_empty() {
            return Ok(String::new());
        }
        Ok(self.responses[call % self.responses.len()].clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
