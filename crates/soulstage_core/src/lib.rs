//! Digit-sum numerology engine.
//!
//! This crate provides:
//! - Iterative digit-sum reduction ([`digit_sum`])
//! - Five life-stage values from a date and optional birth time ([`stage`])
//! - Soul level classification with blockage detection ([`soul_level`])
//! - Digit frequency tables over a birth code ([`frequency`])
//! - Soul age tiers from zero counts ([`soul_age`])
//! - A one-shot evaluation of both solar and lunar charts ([`evaluate`])
//!
//! Everything here is a pure function of its input. Lunar dates come from
//! [`soulstage_lunar`].

pub mod birth_code;
pub mod digit_sum;
pub mod error;
pub mod evaluate;
pub mod frequency;
pub mod input;
pub mod soul_age;
pub mod soul_level;
pub mod stage;

pub use birth_code::{BirthCode, Calendar, CalendarDate};
pub use digit_sum::{DigitChain, reduce};
pub use error::{EvaluationError, InputError};
pub use evaluate::{Calculator, ChartReport, Evaluation, StageReport, evaluate};
pub use frequency::{
    DigitEmphasis, FrequencyAnalysis, FrequencyRow, FrequencyTable, analyze_frequency,
    frequency_threshold,
};
pub use input::{BirthInput, DateBounds, EARLIEST_BIRTH_DATE};
pub use soul_age::{ALL_SOUL_AGES, SoulAge, classify_soul_age};
pub use soul_level::{SoulLevel, classify_soul_level};
pub use stage::{ALL_STAGES, Stage, StageParseError, StageSet, StageValue, compute_stages};

// Re-export lunar types so callers don't need to depend on soulstage_lunar directly.
pub use soulstage_lunar::{ChineseCalendar, LunarConverter, LunarDate, LunarError};
