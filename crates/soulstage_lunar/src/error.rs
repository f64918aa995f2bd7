//! Error types for lunar calendar conversion.

use thiserror::Error;

/// Errors from solar → lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LunarError {
    /// The solar date does not exist (e.g. 2023-02-30).
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// The solar date lies outside the lunar year table.
    #[error("solar date {year:04}-{month:02}-{day:02} is outside the supported lunar range")]
    OutOfRange { year: i32, month: u32, day: u32 },
}
