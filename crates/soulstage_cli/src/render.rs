//! Plain-text rendering of results.

use std::fmt::Write;

use soulstage_core::{
    ChartReport, DigitEmphasis, Evaluation, FrequencyAnalysis, LunarDate, StageSet,
};

/// Full two-calendar report.
pub fn evaluation(eval: &Evaluation) -> String {
    let mut out = String::new();
    if let Some(error) = &eval.error {
        let _ = writeln!(out, "⚠ {error}");
    }

    let _ = writeln!(out, "國曆分析結果");
    chart(&mut out, &eval.solar);

    let _ = writeln!(out);
    let _ = writeln!(out, "農曆分析結果");
    if eval.lunar_text.is_empty() {
        let _ = writeln!(out, "無法取得農曆轉換結果，請確認輸入是否正確");
    } else {
        let _ = writeln!(out, "對應農曆日期：{}", eval.lunar_text);
        chart(&mut out, &eval.lunar);
    }
    out
}

fn chart(out: &mut String, report: &ChartReport) {
    if report.is_empty() {
        let _ = writeln!(out, "  (無資料)");
        return;
    }
    let _ = writeln!(out, "先天數：{}", report.label);
    for row in report.stage_reports() {
        match &row.level {
            Some(level) => {
                let _ = writeln!(out, "{}：{} {}", row.label, row.value, level);
            }
            None => {
                let _ = writeln!(out, "{}：{}", row.label, row.value);
            }
        }
    }
    if let Some(age) = report.soul_age {
        let _ = writeln!(out, "靈魂年齡：{}", age.label());
    }
    if let Some(acquired) = &report.acquired_number {
        let _ = writeln!(out, "後天數：{acquired}");
    }
    out.push_str(&frequency(&report.frequency));
}

/// Frequency table with its high-frequency summary line.
///
/// Row markers: `*` maximum count, `+` at or above the threshold.
pub fn frequency(analysis: &FrequencyAnalysis) -> String {
    let mut out = String::new();
    if !analysis.high_frequency.is_empty() {
        let _ = writeln!(out, "數字頻率高：{}", join_digits(&analysis.high_frequency));
    }
    let _ = writeln!(out, "數字  出現次數");
    for row in analysis.rows() {
        let marker = match row.emphasis {
            DigitEmphasis::Max => " *",
            DigitEmphasis::High => " +",
            DigitEmphasis::Absent | DigitEmphasis::Normal => "",
        };
        let _ = writeln!(out, "{:>4}  {} 次{marker}", row.digit, row.count);
    }
    out
}

/// Five stage lines.
pub fn stages(set: &StageSet) -> String {
    let mut out = String::new();
    for (stage, value) in set.iter() {
        let _ = writeln!(out, "{}：{value}", stage.label());
    }
    out
}

/// Conversion result line pair.
pub fn lunar(date: &LunarDate) -> String {
    format!("{}\n{date}\n", date.chinese_text())
}

fn join_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("、")
}

#[cfg(test)]
mod tests {
    use soulstage_core::{
        BirthCode, BirthInput, CalendarDate, analyze_frequency, compute_stages, evaluate,
    };

    use super::*;

    #[test]
    fn evaluation_sections() {
        let eval = evaluate(&BirthInput::new(CalendarDate::new(1990, 5, 15)));
        let text = evaluation(&eval);
        assert!(text.contains("先天數：陽(+)19900515"));
        assert!(text.contains("晚年數：19/10/1 (7)"));
        assert!(text.contains("青年數：--/--\n"));
        assert!(text.contains("靈魂年齡：青年靈（五次元）"));
        assert!(text.contains("後天數：30"));
        assert!(text.contains("對應農曆日期：農曆1990年四月廿一"));
        assert!(text.contains("先天數：陰(-)19900421"));
    }

    #[test]
    fn failed_lunar_section() {
        let eval = evaluate(&BirthInput::new(CalendarDate::new(1899, 6, 1)));
        let text = evaluation(&eval);
        assert!(text.contains("無法取得農曆轉換結果"));
        assert!(!text.contains("陰(-)"));
    }

    #[test]
    fn frequency_markers() {
        let code = BirthCode::from_digits("20050210").unwrap();
        let text = frequency(&analyze_frequency(&code, 2005));
        assert!(text.contains("數字頻率高：0、2"));
        assert!(text.contains("   0  4 次 *"));
        assert!(text.contains("   2  2 次 +"));
        assert!(text.contains("   7  0 次\n"));
    }

    #[test]
    fn stage_lines() {
        let set = compute_stages(Some(CalendarDate::new(1990, 5, 15)), None, None);
        let text = stages(&set);
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("晚年數：19/10/1\n"));
    }
}
