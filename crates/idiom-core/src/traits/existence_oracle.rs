use crate::models::Existence;

/// Remote reference service that can confirm an idiom by exact title.
///
/// Implementations never fail: transport problems come back as
/// [`Existence::Unknown`].
pub trait IExistenceOracle: Send + Sync {
    fn lookup(&self, title: &str) -> Existence;

    fn name(&self) -> &str;
}
