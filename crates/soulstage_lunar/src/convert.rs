//! Solar (Gregorian) → lunar date conversion.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::LunarError;
use crate::names::{LEAP_PREFIX, day_name, month_name};
use crate::table::{
    FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, days_in_month, days_in_year, leap_month_days,
    leap_month_of,
};

/// Solar date of lunar 1900-01-01, as days from 0001-01-01 (day 1).
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

/// Earliest convertible solar date (lunar 1900-01-01).
pub const FIRST_SUPPORTED_SOLAR: (i32, u32, u32) = (1900, 1, 31);

/// Latest convertible solar date (last day of lunar year 2100).
pub const LAST_SUPPORTED_SOLAR: (i32, u32, u32) = (2101, 1, 28);

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub year: i32,
    /// Month number 1..=12. A leap month repeats the number of the month before it.
    pub month: u32,
    /// Day of month 1..=30.
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Month name with the 閏 prefix on leap months, e.g. `閏二`.
    pub fn month_name(&self) -> String {
        let name = month_name(self.month).unwrap_or_default();
        if self.is_leap_month {
            format!("{LEAP_PREFIX}{name}")
        } else {
            name.to_string()
        }
    }

    /// Day name, e.g. `廿一`.
    pub fn day_name(&self) -> &'static str {
        day_name(self.day).unwrap_or_default()
    }

    /// Full rendering, e.g. `農曆1990年四月廿一`.
    pub fn chinese_text(&self) -> String {
        format!("農曆{}年{}月{}", self.year, self.month_name(), self.day_name())
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, "({LEAP_PREFIX})")?;
        }
        Ok(())
    }
}

/// Converts solar dates to lunar dates.
pub trait LunarConverter {
    fn to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, LunarError>;
}

/// Table-driven Chinese calendar covering lunar years 1900..=2100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChineseCalendar;

impl LunarConverter for ChineseCalendar {
    fn to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, LunarError> {
        solar_to_lunar(year, month, day)
    }
}

/// Convert a Gregorian date to the Chinese lunar calendar.
///
/// Walks whole lunar years from the 1900-01-31 epoch, then months, inserting
/// the leap month directly after the month it repeats.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, LunarError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(LunarError::InvalidSolarDate { year, month, day })?;
    let out_of_range = LunarError::OutOfRange { year, month, day };

    let mut offset = date.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
    if offset < 0 {
        return Err(out_of_range);
    }

    let mut lunar_year = FIRST_LUNAR_YEAR;
    loop {
        let len = days_in_year(lunar_year).ok_or(out_of_range.clone())? as i32;
        if offset < len {
            break;
        }
        offset -= len;
        lunar_year += 1;
        if lunar_year > LAST_LUNAR_YEAR {
            return Err(out_of_range);
        }
    }

    let leap = leap_month_of(lunar_year);
    for lunar_month in 1..=12 {
        let len = days_in_month(lunar_year, lunar_month).ok_or(out_of_range.clone())? as i32;
        if offset < len {
            return Ok(found(lunar_year, lunar_month, offset, false));
        }
        offset -= len;

        if leap == Some(lunar_month) {
            let len = leap_month_days(lunar_year) as i32;
            if offset < len {
                return Ok(found(lunar_year, lunar_month, offset, true));
            }
            offset -= len;
        }
    }

    // Unreachable with a consistent table: the year length bounds the offset.
    Err(out_of_range)
}

fn found(year: i32, month: u32, offset: i32, is_leap_month: bool) -> LunarDate {
    let lunar = LunarDate {
        year,
        month,
        day: offset as u32 + 1,
        is_leap_month,
    };
    tracing::trace!(%lunar, "solar date resolved");
    lunar
}
