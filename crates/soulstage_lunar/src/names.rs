//! Traditional Chinese names for lunar months and days.

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Prefix marking a leap (intercalary) month.
pub const LEAP_PREFIX: &str = "閏";

/// Name of lunar month 1..=12 (正 .. 臘).
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Name of lunar day 1..=30 (初一 .. 三十).
pub fn day_name(day: u32) -> Option<&'static str> {
    DAY_NAMES.get((day as usize).checked_sub(1)?).copied()
}
