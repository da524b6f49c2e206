/// Idiom finder version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Idiom returned when no verified idiom could be produced.
pub const SENTINEL_IDIOM: &str = "未找到成语";

/// Explanation paired with [`SENTINEL_IDIOM`].
pub const SENTINEL_EXPLANATION: &str =
    "No verified idiom could be found for this situation. Try again!";

/// Tolerance used when checking that a vector has unit length.
pub const UNIT_NORM_TOLERANCE: f32 = 1e-4;

/// Separator between the headword and the gloss in flat corpus entries.
pub const FLAT_RECORD_SEPARATOR: &str = ": ";
