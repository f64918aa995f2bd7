//! End-to-end evaluation scenarios.
//!
//! Pure-math tests (no external data needed).

use chrono::{Datelike, NaiveDate};
use soulstage_core::{
    BirthInput, Calendar, CalendarDate, EvaluationError, SoulAge, SoulLevel, Stage, evaluate,
};

fn input(y: i32, m: u32, d: u32) -> BirthInput {
    BirthInput::new(CalendarDate::new(y, m, d))
}

// ---------------------------------------------------------------------------
// 1990-05-15
// ---------------------------------------------------------------------------

#[test]
fn date_only_solar_chart() {
    let eval = evaluate(&input(1990, 5, 15));
    let solar = &eval.solar;

    assert_eq!(solar.calendar, Calendar::Solar);
    assert_eq!(solar.birth_code.as_str(), "19900515");
    assert_eq!(solar.label, "陽(+)19900515");

    assert_eq!(solar.stages.get(Stage::LateLife).to_string(), "19/10/1");
    assert_eq!(solar.stages.get(Stage::MidLife).to_string(), "24/6");
    assert_eq!(solar.stages.get(Stage::Core).to_string(), "30/3");
    assert_eq!(solar.stages.get(Stage::Youth).to_string(), "--/--");
    assert_eq!(solar.stages.get(Stage::EarlyChildhood).to_string(), "--/--");

    assert_eq!(solar.level(Stage::LateLife), Some(&SoulLevel::Seven));
    assert_eq!(solar.level(Stage::MidLife), Some(&SoulLevel::One));
    assert_eq!(solar.level(Stage::Core), Some(&SoulLevel::Two));
    assert_eq!(solar.level(Stage::Youth), None);

    assert_eq!(solar.acquired_number.as_deref(), Some("30"));
    assert_eq!(solar.soul_age, Some(SoulAge::Youth));
    assert_eq!(solar.frequency.threshold, 3);
}

#[test]
fn date_only_lunar_chart() {
    let eval = evaluate(&input(1990, 5, 15));
    assert_eq!(eval.error, None);
    assert_eq!(eval.lunar_text, "農曆1990年四月廿一");

    let lunar = &eval.lunar;
    assert_eq!(lunar.birth_code.as_str(), "19900421");
    assert_eq!(lunar.label, "陰(-)19900421");
    // 19; +0+4 = 23; +2+1 = 26
    assert_eq!(lunar.stages.get(Stage::LateLife).to_string(), "19/10/1");
    assert_eq!(lunar.stages.get(Stage::MidLife).to_string(), "23/5");
    assert_eq!(lunar.stages.get(Stage::Core).to_string(), "26/8");
    assert!(lunar.stages.get(Stage::Youth).is_empty());
}

#[test]
fn with_birth_time() {
    let eval = evaluate(&input(1990, 5, 15).with_time(8, 30));

    assert_eq!(eval.solar.birth_code.as_str(), "199005150830");
    assert_eq!(eval.solar.stages.get(Stage::Youth).to_string(), "38/11/2");
    assert_eq!(eval.solar.stages.get(Stage::EarlyChildhood).to_string(), "41/5");
    assert_eq!(eval.solar.soul_age, Some(SoulAge::Elder));

    assert_eq!(eval.lunar.birth_code.as_str(), "199004210830");
    assert_eq!(eval.lunar.stages.get(Stage::Youth).to_string(), "34/7");
    assert_eq!(eval.lunar.stages.get(Stage::EarlyChildhood).to_string(), "37/10/1");
}

// ---------------------------------------------------------------------------
// Leap months and failures
// ---------------------------------------------------------------------------

#[test]
fn leap_month_birth() {
    let eval = evaluate(&input(2023, 3, 22));
    let lunar_date = eval.lunar_date.unwrap();
    assert!(lunar_date.is_leap_month);
    assert_eq!(eval.lunar.label, "陰(-)[閏]20230201");
    assert_eq!(eval.lunar.frequency.threshold, 2);
}

#[test]
fn out_of_range_clears_lunar_results() {
    let eval = evaluate(&input(1899, 6, 1));
    assert!(matches!(eval.error, Some(EvaluationError::LunarConversion(_))));
    assert!(!eval.solar.is_empty());
    assert!(eval.lunar.is_empty());
    assert!(eval.lunar.stages.is_empty());
    assert!(eval.lunar_text.is_empty());
    assert_eq!(eval.lunar.soul_age, None);
}

#[test]
fn missing_date() {
    let eval = evaluate(&BirthInput::default());
    assert_eq!(eval.error, Some(EvaluationError::MissingDate));
    assert!(eval.solar.stages.is_empty());
    assert!(eval.lunar.stages.is_empty());
}

// ---------------------------------------------------------------------------
// Sweeps
// ---------------------------------------------------------------------------

#[test]
fn sweep_invariants() {
    let mut date = NaiveDate::from_ymd_opt(1911, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut tick = 0u8;
    while date <= end {
        let mut birth = input(date.year(), date.month(), date.day());
        if tick % 2 == 0 {
            birth = birth.with_time(tick % 24, ((u32::from(tick) * 7) % 60) as u8);
        }
        let eval = evaluate(&birth);
        assert_eq!(eval.error, None, "{date}");

        for chart in [&eval.solar, &eval.lunar] {
            assert_eq!(chart.frequency.table.total(), chart.birth_code.len(), "{date}");
            for (stage, value) in chart.stages.iter() {
                let level = chart.level(stage);
                assert_eq!(value.is_empty(), level.is_none(), "{date} {stage:?} {value}");
            }
            assert!(chart.soul_age.is_some());
        }
        let timed = birth.hour.is_some();
        assert_eq!(!eval.solar.stages.get(Stage::Youth).is_empty(), timed);

        date += chrono::Duration::days(11);
        tick = tick.wrapping_add(1);
    }
}
