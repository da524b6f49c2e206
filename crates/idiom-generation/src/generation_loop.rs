//! Bounded generate-then-verify loop.

use std::sync::Arc;

use idiom_core::config::GenerationConfig;
use idiom_core::errors::IdiomResult;
use idiom_core::phonetic;
use idiom_core::traits::IGenerationOracle;
use idiom_core::IdiomAnswer;
use idiom_observability::events;
use idiom_verification::VerificationChain;
use tracing::debug;

use crate::cache::ResultCache;
use crate::oracles::create_oracle;
use crate::parser::parse_response;
use crate::prompt::build_prompt;

/// Asks the oracle for an idiom, keeps only verified answers, and
/// remembers them per situation.
///
/// Attempts are strictly sequential: a rejection is what triggers the next
/// attempt. Nothing carries over between attempts. Errors never escape
/// [`GenerationLoop::find_idiom`]; exhaustion yields
/// [`IdiomAnswer::sentinel`].
pub struct GenerationLoop {
    oracle: Box<dyn IGenerationOracle>,
    chain: Arc<VerificationChain>,
    cache: ResultCache,
    max_output_tokens: usize,
    default_attempts: usize,
}

/// Why one attempt did not produce an answer.
enum Rejection {
    Oracle(String),
    Unparseable,
    Unverified(String),
}

impl GenerationLoop {
    pub fn new(
        oracle: Box<dyn IGenerationOracle>,
        chain: Arc<VerificationChain>,
        cache: ResultCache,
        max_output_tokens: usize,
    ) -> Self {
        Self {
            oracle,
            chain,
            cache,
            max_output_tokens,
            default_attempts: idiom_core::config::defaults::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Attempt bound used by [`GenerationLoop::find_idiom_default`].
    pub fn with_default_attempts(mut self, attempts: usize) -> Self {
        self.default_attempts = attempts;
        self
    }

    pub fn from_config(config: &GenerationConfig, chain: Arc<VerificationChain>) -> IdiomResult<Self> {
        let oracle = create_oracle(config)?;
        Ok(Self::new(
            oracle,
            chain,
            ResultCache::new(&config.result_cache),
            config.max_output_tokens,
        )
        .with_default_attempts(config.max_attempts))
    }

    /// Find a verified idiom for `situation` in at most `max_attempts`
    /// oracle calls. Zero is treated as one.
    pub fn find_idiom(&self, situation: &str, max_attempts: usize) -> IdiomAnswer {
        if let Some(answer) = self.cache.get(situation) {
            events::result_cache_hit(situation);
            return answer;
        }

        let max_attempts = max_attempts.max(1);
        let prompt = build_prompt(situation);

        for attempt in 1..=max_attempts {
            match self.attempt(&prompt) {
                Ok(answer) => {
                    events::generation_accepted(&answer.idiom, attempt);
                    self.cache.insert(situation, answer.clone());
                    return answer;
                }
                Err(Rejection::Oracle(reason)) => {
                    events::generation_attempt_rejected(attempt, max_attempts, "", &reason);
                }
                Err(Rejection::Unparseable) => {
                    events::generation_attempt_rejected(attempt, max_attempts, "", "no usable lines");
                }
                Err(Rejection::Unverified(candidate)) => {
                    events::generation_attempt_rejected(attempt, max_attempts, &candidate, "not verified");
                }
            }
        }

        events::generation_exhausted(situation, max_attempts);
        IdiomAnswer::sentinel()
    }

    /// [`GenerationLoop::find_idiom`] with the configured attempt bound.
    pub fn find_idiom_default(&self, situation: &str) -> IdiomAnswer {
        self.find_idiom(situation, self.default_attempts)
    }

    fn attempt(&self, prompt: &str) -> Result<IdiomAnswer, Rejection> {
        let text = self
            .oracle
            .generate(prompt, self.max_output_tokens)
            .map_err(|e| Rejection::Oracle(e.to_string()))?;
        let parsed = parse_response(&text).ok_or(Rejection::Unparseable)?;
        debug!(candidate = %parsed.idiom, details = parsed.details.len(), "parsed oracle response");

        if !self.chain.verify(&parsed.idiom) {
            return Err(Rejection::Unverified(parsed.idiom));
        }

        let pinyin = phonetic::annotate(&parsed.idiom);
        let explanation = parsed.explanation(&pinyin);
        Ok(IdiomAnswer::new(parsed.idiom, explanation))
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn chain(&self) -> &Arc<VerificationChain> {
        &self.chain
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }
}
