//! Validated birth input.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::birth_code::{BirthCode, CalendarDate};
use crate::error::InputError;

/// Earliest accepted birth date.
pub const EARLIEST_BIRTH_DATE: (i32, u32, u32) = (1911, 1, 1);

const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;

/// Inclusive window of accepted birth dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateBounds {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    /// From [`EARLIEST_BIRTH_DATE`] up to `latest`.
    pub fn up_to(latest: NaiveDate) -> Self {
        let (y, m, d) = EARLIEST_BIRTH_DATE;
        let earliest = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
        Self::new(earliest, latest)
    }

    /// From [`EARLIEST_BIRTH_DATE`] up to the local current date.
    pub fn up_to_today() -> Self {
        Self::up_to(Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.earliest..=self.latest).contains(&date)
    }
}

/// One snapshot of the user's input. `date` absent means incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BirthInput {
    pub date: Option<CalendarDate>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    /// The user's own leap-month flag. Lunar results use the flag reported
    /// by the conversion instead.
    pub leap_month: bool,
}

impl BirthInput {
    /// Date-only input.
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, hour: u8, minute: u8) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn with_leap_month(mut self, leap_month: bool) -> Self {
        self.leap_month = leap_month;
        self
    }

    /// Validate raw form fields.
    ///
    /// Blank fields are absent. Hour and minute accept one or two digits and
    /// are stored as numbers, so `"8"` and `"08"` are the same hour.
    pub fn parse(
        date: &str,
        hour: &str,
        minute: &str,
        leap_month: bool,
        bounds: DateBounds,
    ) -> Result<Self, InputError> {
        let date = parse_date(date, bounds)?;
        let hour = parse_clock_field("hour", hour, MAX_HOUR)?;
        let minute = parse_clock_field("minute", minute, MAX_MINUTE)?;
        if hour.is_some() != minute.is_some() {
            return Err(InputError::IncompleteTime);
        }
        Ok(Self {
            date,
            hour,
            minute,
            leap_month,
        })
    }

    /// Solar birth code, empty when the date is missing.
    pub fn birth_code(&self) -> BirthCode {
        match self.date {
            Some(date) => BirthCode::new(date, self.hour, self.minute),
            None => BirthCode::empty(),
        }
    }
}

fn parse_date(text: &str, bounds: DateBounds) -> Result<Option<CalendarDate>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| InputError::MalformedDate(text.to_string()))?;
    if !bounds.contains(date) {
        return Err(InputError::DateOutOfBounds {
            date,
            earliest: bounds.earliest,
            latest: bounds.latest,
        });
    }
    Ok(Some(CalendarDate::new(date.year(), date.month(), date.day())))
}

fn parse_clock_field(field: &'static str, text: &str, max: u8) -> Result<Option<u8>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let malformed = || InputError::MalformedTime {
        field,
        value: text.to_string(),
    };
    if text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let value: u8 = text.parse().map_err(|_| malformed())?;
    if value > max {
        return Err(InputError::TimeOutOfRange { field, value, max });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DateBounds {
        DateBounds::up_to(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn full_input() {
        let input = BirthInput::parse("1990-05-15", "08", "30", false, bounds()).unwrap();
        assert_eq!(input.date, Some(CalendarDate::new(1990, 5, 15)));
        assert_eq!(input.hour, Some(8));
        assert_eq!(input.minute, Some(30));
        assert_eq!(input.birth_code().as_str(), "199005150830");
    }

    #[test]
    fn single_digit_fields_are_padded() {
        let input = BirthInput::parse("1990-05-15", "8", "5", false, bounds()).unwrap();
        assert_eq!(input.birth_code().as_str(), "199005150805");
    }

    #[test]
    fn blank_date_is_incomplete_not_error() {
        let input = BirthInput::parse("", "", "", false, bounds()).unwrap();
        assert_eq!(input.date, None);
        assert!(input.birth_code().is_empty());
    }

    #[test]
    fn malformed_date() {
        assert!(matches!(
            BirthInput::parse("1990/05/15", "", "", false, bounds()),
            Err(InputError::MalformedDate(_))
        ));
        assert!(matches!(
            BirthInput::parse("1990-02-30", "", "", false, bounds()),
            Err(InputError::MalformedDate(_))
        ));
    }

    #[test]
    fn date_bounds() {
        assert!(matches!(
            BirthInput::parse("1910-12-31", "", "", false, bounds()),
            Err(InputError::DateOutOfBounds { .. })
        ));
        assert!(matches!(
            BirthInput::parse("2026-10-20", "", "", false, bounds()),
            Err(InputError::DateOutOfBounds { .. })
        ));
        assert!(BirthInput::parse("1911-01-01", "", "", false, bounds()).is_ok());
        assert!(BirthInput::parse("2026-10-19", "", "", false, bounds()).is_ok());
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(
            BirthInput::parse("1990-05-15", "24", "00", false, bounds()),
            Err(InputError::TimeOutOfRange {
                field: "hour",
                value: 24,
                max: 23
            })
        );
    }

    #[test]
    fn minute_out_of_range() {
        assert!(matches!(
            BirthInput::parse("1990-05-15", "10", "60", false, bounds()),
            Err(InputError::TimeOutOfRange { field: "minute", .. })
        ));
    }

    #[test]
    fn non_numeric_time() {
        assert!(matches!(
            BirthInput::parse("1990-05-15", "a1", "00", false, bounds()),
            Err(InputError::MalformedTime { field: "hour", .. })
        ));
        assert!(matches!(
            BirthInput::parse("1990-05-15", "10", "123", false, bounds()),
            Err(InputError::MalformedTime { field: "minute", .. })
        ));
    }

    #[test]
    fn hour_and_minute_travel_together() {
        assert_eq!(
            BirthInput::parse("1990-05-15", "08", "", false, bounds()),
            Err(InputError::IncompleteTime)
        );
        assert_eq!(
            BirthInput::parse("1990-05-15", "", "30", false, bounds()),
            Err(InputError::IncompleteTime)
        );
    }

    #[test]
    fn builder_matches_parse() {
        let built = BirthInput::new(CalendarDate::new(1990, 5, 15))
            .with_time(8, 30)
            .with_leap_month(true);
        let parsed = BirthInput::parse("1990-05-15", "08", "30", true, bounds()).unwrap();
        assert_eq!(built, parsed);
    }
}
