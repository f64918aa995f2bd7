//! Per-digit occurrence counts over a birth code.

use serde::Serialize;

use crate::birth_code::BirthCode;

/// Births from this year on use [`MODERN_THRESHOLD`].
pub const MODERN_REFERENCE_YEAR: i32 = 2000;

/// High-frequency threshold for births in or after 2000.
pub const MODERN_THRESHOLD: usize = 2;

/// High-frequency threshold for births before 2000.
pub const LEGACY_THRESHOLD: usize = 3;

/// Count at or above which a digit is "high frequency" for a reference year.
pub const fn frequency_threshold(reference_year: i32) -> usize {
    if reference_year >= MODERN_REFERENCE_YEAR {
        MODERN_THRESHOLD
    } else {
        LEGACY_THRESHOLD
    }
}

/// Occurrence count of each digit 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable([usize; 10]);

impl FrequencyTable {
    pub fn from_code(code: &BirthCode) -> Self {
        let mut counts = [0; 10];
        for d in code.digits() {
            counts[usize::from(d)] += 1;
        }
        Self(counts)
    }

    /// Count for `digit`; 0 for anything outside 0..=9.
    pub fn count(&self, digit: u8) -> usize {
        self.0.get(usize::from(digit)).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[usize; 10] {
        &self.0
    }

    /// Largest count in the table.
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all counts, equal to the code length.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// How a table row is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitEmphasis {
    /// Never occurs.
    Absent,
    /// Ties for the highest count.
    Max,
    /// At or above the threshold but below the maximum.
    High,
    Normal,
}

/// One row of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub digit: u8,
    pub count: usize,
    pub emphasis: DigitEmphasis,
}

/// Frequency table plus its high/max digit sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FrequencyAnalysis {
    pub table: FrequencyTable,
    pub threshold: usize,
    /// Digits with count ≥ threshold, ascending.
    pub high_frequency: Vec<u8>,
    /// Digits whose count equals the maximum (empty when the code is empty), ascending.
    pub max_frequency: Vec<u8>,
}

impl FrequencyAnalysis {
    pub fn emphasis(&self, digit: u8) -> DigitEmphasis {
        if self.table.count(digit) == 0 {
            DigitEmphasis::Absent
        } else if self.max_frequency.contains(&digit) {
            DigitEmphasis::Max
        } else if self.high_frequency.contains(&digit) {
            DigitEmphasis::High
        } else {
            DigitEmphasis::Normal
        }
    }

    /// All ten rows, digit 0 first.
    pub fn rows(&self) -> Vec<FrequencyRow> {
        (0..10)
            .map(|digit| FrequencyRow {
                digit,
                count: self.table.count(digit),
                emphasis: self.emphasis(digit),
            })
            .collect()
    }
}

/// Count digits in `code` and flag high/max frequency digits.
pub fn analyze_frequency(code: &BirthCode, reference_year: i32) -> FrequencyAnalysis {
    let table = FrequencyTable::from_code(code);
    let threshold = frequency_threshold(reference_year);
    let max = table.max();

    let high_frequency = (0..10).filter(|&d| table.count(d) >= threshold).collect();
    let max_frequency = if max > 0 {
        (0..10).filter(|&d| table.count(d) == max).collect()
    } else {
        Vec::new()
    };

    FrequencyAnalysis {
        table,
        threshold,
        high_frequency,
        max_frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> BirthCode {
        BirthCode::from_digits(s).unwrap()
    }

    #[test]
    fn threshold_policy() {
        assert_eq!(frequency_threshold(1999), 3);
        assert_eq!(frequency_threshold(2000), 2);
        assert_eq!(frequency_threshold(2024), 2);
        assert_eq!(frequency_threshold(1911), 3);
    }

    #[test]
    fn counts_sum_to_length() {
        let c = code("199005150830");
        let a = analyze_frequency(&c, 1990);
        assert_eq!(a.table.total(), c.len());
        assert_eq!(a.rows().len(), 10);
    }

    #[test]
    fn legacy_year_uses_three() {
        // 1:2 9:2 0:2 5:2
        let a = analyze_frequency(&code("19900515"), 1990);
        assert!(a.high_frequency.is_empty());
        assert_eq!(a.max_frequency, vec![0, 1, 5, 9]);
    }

    #[test]
    fn modern_year_uses_two() {
        // 2:2 0:4 1:1 5:1
        let a = analyze_frequency(&code("20050210"), 2005);
        assert_eq!(a.high_frequency, vec![0, 2]);
        assert_eq!(a.max_frequency, vec![0]);
    }

    #[test]
    fn emphasis_precedence() {
        let a = analyze_frequency(&code("20050210"), 2005);
        assert_eq!(a.emphasis(0), DigitEmphasis::Max);
        assert_eq!(a.emphasis(2), DigitEmphasis::High);
        assert_eq!(a.emphasis(5), DigitEmphasis::Normal);
        assert_eq!(a.emphasis(7), DigitEmphasis::Absent);
    }

    #[test]
    fn empty_code_has_no_max() {
        let a = analyze_frequency(&BirthCode::empty(), 2000);
        assert_eq!(a.table.total(), 0);
        assert!(a.max_frequency.is_empty());
        assert!(a.high_frequency.is_empty());
        assert!(a.rows().iter().all(|r| r.emphasis == DigitEmphasis::Absent));
    }
}
