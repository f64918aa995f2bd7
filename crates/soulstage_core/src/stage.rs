//! Five life-stage values built by a running digit-sum accumulation.
//!
//! Each stage adds one date/time field's digits to the running total of the
//! stages before it:
//!
//! | Stage | Total |
//! |---|---|
//! | late life | year |
//! | mid life | year + month |
//! | core | year + month + day |
//! | youth | year + month + day + hour |
//! | early childhood | year + month + day + hour + minute |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::birth_code::{CalendarDate, padded_digits};
use crate::digit_sum::{DigitChain, reduce, sum_digits};

/// Text shown for a stage that cannot be computed.
pub const EMPTY_STAGE_TEXT: &str = "--/--";

/// The five life stages, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    LateLife,
    MidLife,
    Core,
    Youth,
    EarlyChildhood,
}

/// All stages in display order (index 0 = late life).
pub const ALL_STAGES: [Stage; 5] = [
    Stage::LateLife,
    Stage::MidLife,
    Stage::Core,
    Stage::Youth,
    Stage::EarlyChildhood,
];

impl Stage {
    /// 0-based position in a [`StageSet`].
    pub const fn index(self) -> usize {
        match self {
            Self::LateLife => 0,
            Self::MidLife => 1,
            Self::Core => 2,
            Self::Youth => 3,
            Self::EarlyChildhood => 4,
        }
    }

    /// Chinese display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LateLife => "晚年數",
            Self::MidLife => "中年數",
            Self::Core => "主命數",
            Self::Youth => "青年數",
            Self::EarlyChildhood => "幼年數",
        }
    }
}

/// One stage result: a digit chain, or empty when its inputs are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageValue {
    #[default]
    Empty,
    Chain(DigitChain),
}

impl StageValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn chain(&self) -> Option<&DigitChain> {
        match self {
            Self::Empty => None,
            Self::Chain(chain) => Some(chain),
        }
    }

    /// Slash-separated segments, empty for [`StageValue::Empty`].
    pub fn segments(&self) -> Vec<String> {
        self.chain().map(DigitChain::segments).unwrap_or_default()
    }

    /// The 後天數 (acquired number) read off a stage: `total/first` for a
    /// three-segment chain, `total` for a two-segment chain, else none.
    pub fn acquired_number(&self) -> Option<String> {
        let parts = self.segments();
        match parts.len() {
            3 => Some(format!("{}/{}", parts[0], parts[1])),
            2 => Some(parts[0].clone()),
            _ => None,
        }
    }
}

impl Display for StageValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_STAGE_TEXT),
            Self::Chain(chain) => Display::fmt(chain, f),
        }
    }
}

impl Serialize for StageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A stage text that is not a well-formed digit chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed stage value '{0}'")]
pub struct StageParseError(pub String);

impl FromStr for StageValue {
    type Err = StageParseError;

    /// Accepts `--/--` or a chain such as `19/10/1`. The reductions must be
    /// the ones the total actually produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains("--") {
            return Ok(Self::Empty);
        }
        let total = s
            .split('/')
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| StageParseError(s.to_string()))?;
        let chain = reduce(total);
        if chain.to_string() != s {
            return Err(StageParseError(s.to_string()));
        }
        Ok(Self::Chain(chain))
    }
}

/// The five stage values, indexed by [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct StageSet([StageValue; 5]);

impl StageSet {
    /// All five stages empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, stage: Stage) -> StageValue {
        self.0[stage.index()]
    }

    pub fn values(&self) -> &[StageValue; 5] {
        &self.0
    }

    /// `(stage, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, StageValue)> + '_ {
        ALL_STAGES.iter().map(|&s| (s, self.get(s)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(StageValue::is_empty)
    }
}

/// Compute the five stages for a date and optional hour/minute.
///
/// A missing date empties every stage. Youth needs the hour; early
/// childhood needs both hour and minute.
pub fn compute_stages(date: Option<CalendarDate>, hour: Option<u8>, minute: Option<u8>) -> StageSet {
    let Some(date) = date else {
        return StageSet::empty();
    };

    let year_sum = sum_digits(&date.year_digits());
    let late = reduce(year_sum);

    let month_base = year_sum;
    let mid = reduce(month_base + sum_digits(&date.month_digits()));

    let day_base = month_base + sum_digits(&date.month_digits());
    let core = reduce(day_base + sum_digits(&date.day_digits()));

    let hour_base = day_base + sum_digits(&date.day_digits());
    let hour_sum = hour.map(two_digit_sum);
    let youth = match hour_sum {
        Some(h) => StageValue::Chain(reduce(hour_base + h)),
        None => StageValue::Empty,
    };

    let early = match (hour_sum, minute) {
        (Some(h), Some(m)) => StageValue::Chain(reduce(hour_base + h + two_digit_sum(m))),
        _ => StageValue::Empty,
    };

    StageSet([
        StageValue::Chain(late),
        StageValue::Chain(mid),
        StageValue::Chain(core),
        youth,
        early,
    ])
}

/// Digit sum of a clock field rendered as two digits.
fn two_digit_sum(value: u8) -> u32 {
    sum_digits(&padded_digits(u32::from(value), 2))
}
