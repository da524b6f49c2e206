//! # idiom-verification
//!
//! Decides whether a candidate idiom is a real, attested expression.
//!
//! ```text
//! VerificationChain
//! ├── Tier 1: ReferenceSet      (exact membership, in memory)
//! ├── Tier 2: OfflineDictionary (CC-CEDICT, has ≥1 definition)
//! └── Tier 3: IExistenceOracle  (remote title lookup, memoized in VerificationCache)
//! ```
//!
//! Tiers are consulted in order and the first confirmation wins. Remote
//! failures never raise: they count as "not verified".

pub mod cache;
pub mod chain;
pub mod tiers;

pub use cache::VerificationCache;
pub use chain::VerificationChain;
pub use tiers::{OfflineDictionary, ReferenceSet, WiktionaryClient};
