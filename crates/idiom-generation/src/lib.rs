//! # idiom-generation
//!
//! Generate-then-verify idiom search.
//!
//! ```text
//! find_idiom(situation)
//! ├── ResultCache hit? → return cached answer
//! └── for each attempt:
//!     ├── IGenerationOracle::generate(prompt)
//!     ├── parse_response → candidate idiom + details
//!     ├── VerificationChain::verify(candidate)
//!     └── verified → annotate, assemble, memoize, return
//! exhausted → sentinel answer
//! ```

pub mod cache;
pub mod generation_loop;
pub mod oracles;
pub mod parser;
pub mod prompt;

pub use cache::ResultCache;
pub use generation_loop::GenerationLoop;
pub use oracles::{create_oracle, ChatCompletionsOracle, MockOracle};
pub use parser::{parse_response, ParsedResponse};
pub use prompt::build_prompt;
