//! # idiom-finder
//!
//! One entry point over both strategies:
//!
//! - **Retrieval**: embed the situation, scan the corpus, rerank.
//! - **Generation**: ask an oracle, keep only verified idioms, retry.
//!
//! ```no_run
//! use idiom_core::IdiomConfig;
//! use idiom_finder::{IdiomFinder, Strategy};
//!
//! let config = IdiomConfig::from_file("idiom.toml")?;
//! let finder = IdiomFinder::from_config(&config)?;
//! let answer = finder.answer("I can't make up my mind", Strategy::Generation)?;
//! # Ok::<(), idiom_core::IdiomError>(())
//! ```

pub mod builder;
pub mod finder;
pub mod strategy;

pub use builder::IdiomFinderBuilder;
pub use finder::IdiomFinder;
pub use strategy::{Answer, Strategy};
