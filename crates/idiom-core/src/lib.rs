//! # idiom-core
//!
//! Foundation crate for the idiom finder.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod phonetic;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::IdiomConfig;
pub use errors::{IdiomError, IdiomResult};
pub use models::{IdiomAnswer, IdiomRecord, UnitVector};
