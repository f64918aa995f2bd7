//! Chinese lunisolar calendar support.
//!
//! This crate provides:
//! - Gregorian → lunar date conversion for lunar years 1900..=2100
//! - Leap-month (閏月) detection and month lengths
//! - Traditional Chinese month and day names
//!
//! The conversion is table-driven: every lunar year is one packed word
//! describing its month lengths and leap month.

pub mod convert;
pub mod error;
pub mod names;
pub mod table;

pub use convert::{
    ChineseCalendar, FIRST_SUPPORTED_SOLAR, LAST_SUPPORTED_SOLAR, LunarConverter, LunarDate,
    solar_to_lunar,
};
pub use error::LunarError;
pub use names::{LEAP_PREFIX, day_name, month_name};
pub use table::{
    FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, days_in_month, days_in_year, leap_month_days, leap_month_of,
};
