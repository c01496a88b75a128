//! Shared type aliases.
//!
//! Row numbers and surrogate keys are 1-based i64 throughout.
//! Julian dates are day numbers, kept as i32 because every date in the
//! generated window fits comfortably.

pub type RowNumber = i64;
pub type SurrogateKey = i64;
pub type Julian = i32;

/// Rendered as NULL wherever a surrogate key column carries it.
pub const NULL_KEY: SurrogateKey = -1;
