//! # idiom-observability
//!
//! Tracing subscriber setup and structured event helpers shared by the
//! retrieval, verification and generation crates.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
