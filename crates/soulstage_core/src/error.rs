//! Error types for input validation and evaluation.

use chrono::NaiveDate;
use soulstage_lunar::LunarError;
use thiserror::Error;

/// Rejected birth input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Date text is not a valid `YYYY-MM-DD` date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
    /// Date is outside the accepted birth-date window.
    #[error("date {date} is outside {earliest} ..= {latest}")]
    DateOutOfBounds {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },
    /// Hour or minute text is not one or two digits.
    #[error("invalid {field} '{value}', expected 1-2 digits")]
    MalformedTime { field: &'static str, value: String },
    /// Hour above 23 or minute above 59.
    #[error("{field} {value} out of range 00~{max:02}")]
    TimeOutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
    /// Only one of hour and minute was given.
    #[error("hour and minute must be given together")]
    IncompleteTime,
}

/// Non-fatal problem reported alongside an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvaluationError {
    /// No date was supplied; every result is empty.
    #[error("birth date is missing")]
    MissingDate,
    /// The solar date has no lunar equivalent; lunar results are cleared.
    #[error("lunar conversion failed: {0}")]
    LunarConversion(#[from] LunarError),
}
