//! One-shot evaluation of a birth input in both calendars.
//!
//! Every call builds a fresh [`Evaluation`] from the input snapshot; nothing
//! is cached or mutated between calls.

use serde::{Serialize, Serializer};
use soulstage_lunar::{ChineseCalendar, LunarConverter, LunarDate};
use tracing::{debug, warn};

use crate::birth_code::{BirthCode, Calendar, CalendarDate};
use crate::error::EvaluationError;
use crate::frequency::{FrequencyAnalysis, analyze_frequency, frequency_threshold};
use crate::input::BirthInput;
use crate::soul_age::{SoulAge, classify_soul_age};
use crate::soul_level::{SoulLevel, classify_soul_level};
use crate::stage::{ALL_STAGES, Stage, StageSet, StageValue, compute_stages};

/// Frequency reference year for a solar chart without a date.
pub const SOLAR_DEFAULT_REFERENCE_YEAR: i32 = 2000;

/// Frequency reference year for a lunar chart without a date.
pub const LUNAR_DEFAULT_REFERENCE_YEAR: i32 = 1900;

/// One stage row: value plus its soul level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    pub label: &'static str,
    pub value: StageValue,
    pub level: Option<SoulLevel>,
}

/// All results for one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    pub calendar: Calendar,
    pub birth_code: BirthCode,
    /// Birth code with its calendar marker, e.g. `陽(+)19900515`.
    pub label: String,
    pub stages: StageSet,
    /// Soul level per stage, same order as `stages`.
    pub levels: [Option<SoulLevel>; 5],
    /// 後天數 read off the core stage.
    pub acquired_number: Option<String>,
    pub frequency: FrequencyAnalysis,
    pub soul_age: Option<SoulAge>,
}

impl ChartReport {
    /// Compute every result for one date in one calendar.
    pub fn build(
        calendar: Calendar,
        date: CalendarDate,
        hour: Option<u8>,
        minute: Option<u8>,
        leap_month: bool,
    ) -> Self {
        let birth_code = BirthCode::new(date, hour, minute);
        let stages = compute_stages(Some(date), hour, minute);
        let levels = ALL_STAGES.map(|stage| classify_soul_level(&birth_code, &stages.get(stage)));

        Self {
            calendar,
            label: birth_code.label(calendar, leap_month),
            acquired_number: stages.get(Stage::Core).acquired_number(),
            frequency: analyze_frequency(&birth_code, date.year),
            soul_age: classify_soul_age(&birth_code),
            birth_code,
            stages,
            levels,
        }
    }

    /// The cleared state: empty code, empty stages, no levels or tier.
    pub fn empty(calendar: Calendar) -> Self {
        let reference_year = match calendar {
            Calendar::Solar => SOLAR_DEFAULT_REFERENCE_YEAR,
            Calendar::Lunar => LUNAR_DEFAULT_REFERENCE_YEAR,
        };
        Self {
            calendar,
            birth_code: BirthCode::empty(),
            label: String::new(),
            stages: StageSet::empty(),
            levels: Default::default(),
            acquired_number: None,
            frequency: FrequencyAnalysis {
                threshold: frequency_threshold(reference_year),
                ..FrequencyAnalysis::default()
            },
            soul_age: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.birth_code.is_empty()
    }

    pub fn level(&self, stage: Stage) -> Option<&SoulLevel> {
        self.levels[stage.index()].as_ref()
    }

    /// Stage rows in display order.
    pub fn stage_reports(&self) -> Vec<StageReport> {
        ALL_STAGES
            .iter()
            .map(|&stage| StageReport {
                stage,
                label: stage.label(),
                value: self.stages.get(stage),
                level: self.levels[stage.index()].clone(),
            })
            .collect()
    }
}

/// Solar and lunar results for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub input: BirthInput,
    pub solar: ChartReport,
    pub lunar: ChartReport,
    pub lunar_date: Option<LunarDate>,
    /// e.g. `農曆1990年四月廿一`; empty when the conversion failed.
    pub lunar_text: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<EvaluationError>,
}

fn serialize_error<S: Serializer>(
    error: &Option<EvaluationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.collect_str(e),
        None => serializer.serialize_none(),
    }
}

/// Runs evaluations against a lunar converter.
#[derive(Debug, Clone, Default)]
pub struct Calculator<C = ChineseCalendar> {
    converter: C,
}

impl<C: LunarConverter> Calculator<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Evaluate one input snapshot.
    ///
    /// Never fails: a missing date yields empty reports and
    /// [`EvaluationError::MissingDate`]; a failed conversion keeps the solar
    /// report, clears every lunar result and yields
    /// [`EvaluationError::LunarConversion`].
    pub fn evaluate(&self, input: &BirthInput) -> Evaluation {
        let Some(date) = input.date else {
            debug!("no birth date; returning empty reports");
            return Evaluation {
                input: *input,
                solar: ChartReport::empty(Calendar::Solar),
                lunar: ChartReport::empty(Calendar::Lunar),
                lunar_date: None,
                lunar_text: String::new(),
                error: Some(EvaluationError::MissingDate),
            };
        };

        let solar = ChartReport::build(Calendar::Solar, date, input.hour, input.minute, false);
        debug!(code = %solar.birth_code, "solar chart computed");

        match self.converter.to_lunar(date.year, date.month, date.day) {
            Ok(lunar_date) => {
                let lunar = ChartReport::build(
                    Calendar::Lunar,
                    lunar_date.into(),
                    input.hour,
                    input.minute,
                    lunar_date.is_leap_month,
                );
                debug!(%lunar_date, code = %lunar.birth_code, "lunar chart computed");
                Evaluation {
                    input: *input,
                    solar,
                    lunar,
                    lunar_date: Some(lunar_date),
                    lunar_text: lunar_date.chinese_text(),
                    error: None,
                }
            }
            Err(e) => {
                warn!(%date, error = %e, "lunar conversion failed; lunar results cleared");
                Evaluation {
                    input: *input,
                    solar,
                    lunar: ChartReport::empty(Calendar::Lunar),
                    lunar_date: None,
                    lunar_text: String::new(),
                    error: Some(e.into()),
                }
            }
        }
    }
}

/// Evaluate with the built-in Chinese calendar.
pub fn evaluate(input: &BirthInput) -> Evaluation {
    Calculator::<ChineseCalendar>::default().evaluate(input)
}
