//! Calendar dates and the birth-code digit string derived from them.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use soulstage_lunar::{LEAP_PREFIX, LunarDate};

/// A year/month/day triple in either calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Year digits, zero-padded to four places.
    pub fn year_digits(&self) -> Vec<u8> {
        padded_digits(self.year.unsigned_abs(), 4)
    }

    /// Month digits, zero-padded to two places.
    pub fn month_digits(&self) -> Vec<u8> {
        padded_digits(self.month, 2)
    }

    /// Day digits, zero-padded to two places.
    pub fn day_digits(&self) -> Vec<u8> {
        padded_digits(self.day, 2)
    }
}

impl From<LunarDate> for CalendarDate {
    fn from(lunar: LunarDate) -> Self {
        Self::new(lunar.year, lunar.month, lunar.day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Decimal digits of `n`, most significant first, left-padded with zeros
/// to at least `width` places.
pub fn padded_digits(n: u32, width: usize) -> Vec<u8> {
    format!("{n:0width$}").bytes().map(|b| b - b'0').collect()
}

/// Which calendar a birth code was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Solar,
    Lunar,
}

/// Concatenated date (and optional hour, minute) digits with no separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthCode(String);

impl BirthCode {
    /// Build `YYYYMMDD[HH][MM]`.
    pub fn new(date: CalendarDate, hour: Option<u8>, minute: Option<u8>) -> Self {
        let mut code = format!("{:04}{:02}{:02}", date.year, date.month, date.day);
        if let Some(h) = hour {
            code.push_str(&format!("{h:02}"));
        }
        if let Some(m) = minute {
            code.push_str(&format!("{m:02}"));
        }
        Self(code)
    }

    /// The code of an incomplete input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing digit string. Returns `None` if it contains a non-digit.
    pub fn from_digits(digits: &str) -> Option<Self> {
        digits
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values in order.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Whether `digit` (0..=9) occurs anywhere in the code.
    pub fn contains(&self, digit: u8) -> bool {
        self.digits().any(|d| d == digit)
    }

    /// Occurrences of `digit` (0..=9) in the code.
    pub fn count(&self, digit: u8) -> usize {
        self.digits().filter(|&d| d == digit).count()
    }

    /// Display label: `陽(+)19900515` or `陰(-)[閏]20230201`.
    pub fn label(&self, calendar: Calendar, leap_month: bool) -> String {
        if self.is_empty() {
            return String::new();
        }
        match calendar {
            Calendar::Solar => format!("陽(+){}", self.0),
            Calendar::Lunar if leap_month => format!("陰(-)[{LEAP_PREFIX}]{}", self.0),
            Calendar::Lunar => format!("陰(-){}", self.0),
        }
    }
}

impl Display for BirthCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_code() {
        let code = BirthCode::new(CalendarDate::new(1990, 5, 15), None, None);
        assert_eq!(code.as_str(), "19900515");
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn date_and_time_code() {
        let code = BirthCode::new(CalendarDate::new(1990, 5, 15), Some(8), Some(30));
        assert_eq!(code.as_str(), "199005150830");
    }

    #[test]
    fn digit_queries() {
        let code = BirthCode::new(CalendarDate::new(1990, 5, 15), None, None);
        assert!(code.contains(9));
        assert!(!code.contains(7));
        assert_eq!(code.count(0), 2);
        assert_eq!(code.count(1), 2);
    }

    #[test]
    fn from_digits_rejects_non_digits() {
        assert!(BirthCode::from_digits("1990a515").is_none());
        assert_eq!(BirthCode::from_digits("123").unwrap().as_str(), "123");
    }

    #[test]
    fn labels() {
        let code = BirthCode::new(CalendarDate::new(2023, 2, 1), None, None);
        assert_eq!(code.label(Calendar::Solar, false), "陽(+)20230201");
        assert_eq!(code.label(Calendar::Lunar, false), "陰(-)20230201");
        assert_eq!(code.label(Calendar::Lunar, true), "陰(-)[閏]20230201");
        assert_eq!(BirthCode::empty().label(Calendar::Lunar, true), "");
    }

    #[test]
    fn padded_component_digits() {
        let date = CalendarDate::new(1990, 5, 15);
        assert_eq!(date.year_digits(), vec![1, 9, 9, 0]);
        assert_eq!(date.month_digits(), vec![0, 5]);
        assert_eq!(date.day_digits(), vec![1, 5]);
    }
}
