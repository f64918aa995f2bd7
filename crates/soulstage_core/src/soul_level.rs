//! Soul level (1–7) of a stage value against the birth code.
//!
//! The stage's first segment ("first layer") and last digit are looked up in
//! the birth code's digit set:
//!
//! | last digit in code | first-layer matches | level |
//! |---|---|---|
//! | no | 0 / 1 / 2+ | 1 / 2 / 3 |
//! | yes | 0 / 1 | 4 / 5 |
//! | yes | 2 | 6 (blocked) or 7 |
//!
//! Single-segment stages are padded to `0N/N` before the lookup.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::birth_code::BirthCode;
use crate::stage::StageValue;

/// Digits checked for blockage.
pub const BLOCKAGE_DIGITS: std::ops::RangeInclusive<u8> = 1..=8;

/// Occurrences at which a digit blocks.
pub const BLOCKAGE_MIN_COUNT: usize = 3;

/// Soul level of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SoulLevel {
    One,
    Two,
    Three,
    Four,
    Five,
    /// Level 6 (擋修): the listed digits repeat too often, ascending.
    Blocked { digits: Vec<u8> },
    Seven,
}

impl SoulLevel {
    /// Numeric level, 1..=7.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Blocked { .. } => 6,
            Self::Seven => 7,
        }
    }

    /// Blocking digits for level 6, empty otherwise.
    pub fn blocking_digits(&self) -> &[u8] {
        match self {
            Self::Blocked { digits } => digits,
            _ => &[],
        }
    }
}

impl Display for SoulLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked { digits } => {
                let list: Vec<String> = digits.iter().map(u8::to_string).collect();
                write!(f, "(6 擋修{})", list.join("、"))
            }
            other => write!(f, "({})", other.number()),
        }
    }
}

impl Serialize for SoulLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classify a stage value against a birth code.
///
/// Returns `None` for an empty stage, and for the one combination the table
/// leaves undefined (last digit present with more than two first-layer matches,
/// which needs a three-digit total).
pub fn classify_soul_level(code: &BirthCode, stage: &StageValue) -> Option<SoulLevel> {
    let mut parts = stage.segments();
    if parts.is_empty() {
        return None;
    }
    if parts.len() == 1 {
        parts = vec![format!("0{}", parts[0]), parts[0].clone()];
    }

    let first_layer = digit_values(&parts[0]);
    let last_digit = *digit_values(parts.last()?).last()?;
    let matches = first_layer.iter().filter(|&&d| code.contains(d)).count();

    if !code.contains(last_digit) {
        return Some(match matches {
            0 => SoulLevel::One,
            1 => SoulLevel::Two,
            _ => SoulLevel::Three,
        });
    }

    match matches {
        0 => Some(SoulLevel::Four),
        1 => Some(SoulLevel::Five),
        2 => Some(blockage(code)),
        _ => None,
    }
}

/// Level 6 with the blocking digits if any digit in 1..=8 repeats at least
/// three times, otherwise level 7.
fn blockage(code: &BirthCode) -> SoulLevel {
    let digits: Vec<u8> = BLOCKAGE_DIGITS
        .filter(|&d| code.count(d) >= BLOCKAGE_MIN_COUNT)
        .collect();
    if digits.is_empty() {
        SoulLevel::Seven
    } else {
        SoulLevel::Blocked { digits }
    }
}

fn digit_values(segment: &str) -> Vec<u8> {
    segment
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
