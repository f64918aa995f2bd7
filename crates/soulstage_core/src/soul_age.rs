//! Soul age tier from the number of zeros in a birth code.

use serde::Serialize;

use crate::birth_code::BirthCode;

/// Seven age tiers ordered by zero count; the last is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoulAge {
    Infant,
    Toddler,
    Youth,
    Mature,
    Elder,
    Transcendent,
    Boundless,
}

/// All tiers in order (index = zero count, capped at 6).
pub const ALL_SOUL_AGES: [SoulAge; 7] = [
    SoulAge::Infant,
    SoulAge::Toddler,
    SoulAge::Youth,
    SoulAge::Mature,
    SoulAge::Elder,
    SoulAge::Transcendent,
    SoulAge::Boundless,
];

impl SoulAge {
    /// Tier for a zero count; six or more zeros is [`SoulAge::Boundless`].
    pub fn from_zero_count(zeros: usize) -> Self {
        ALL_SOUL_AGES[zeros.min(ALL_SOUL_AGES.len() - 1)]
    }

    /// 0-based tier index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Infant => 0,
            Self::Toddler => 1,
            Self::Youth => 2,
            Self::Mature => 3,
            Self::Elder => 4,
            Self::Transcendent => 5,
            Self::Boundless => 6,
        }
    }

    /// Dimension the tier is associated with (3..=9).
    pub const fn dimension(self) -> u8 {
        self.index() + 3
    }

    /// Chinese display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant => "嬰兒靈（三次元）",
            Self::Toddler => "幼兒靈（四次元）",
            Self::Youth => "青年靈（五次元）",
            Self::Mature => "成熟靈（六次元）",
            Self::Elder => "老年靈（七次元）",
            Self::Transcendent => "超自然（八次元）",
            Self::Boundless => "無限靈（九次元）",
        }
    }
}

/// Classify a birth code. An empty code (no date) has no tier.
pub fn classify_soul_age(code: &BirthCode) -> Option<SoulAge> {
    if code.is_empty() {
        return None;
    }
    Some(SoulAge::from_zero_count(code.count(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_zeros_is_youth() {
        let code = BirthCode::from_digits("19900515").unwrap();
        assert_eq!(classify_soul_age(&code), Some(SoulAge::Youth));
    }

    #[test]
    fn no_zeros_is_infant() {
        let code = BirthCode::from_digits("19871129").unwrap();
        assert_eq!(classify_soul_age(&code), Some(SoulAge::Infant));
    }

    #[test]
    fn six_or_more_is_boundless() {
        assert_eq!(SoulAge::from_zero_count(6), SoulAge::Boundless);
        assert_eq!(SoulAge::from_zero_count(12), SoulAge::Boundless);
        let code = BirthCode::from_digits("200010010000").unwrap();
        assert_eq!(classify_soul_age(&code), Some(SoulAge::Boundless));
    }

    #[test]
    fn empty_code_has_no_tier() {
        assert_eq!(classify_soul_age(&BirthCode::empty()), None);
    }

    #[test]
    fn monotonic_in_zero_count() {
        let mut prev = SoulAge::from_zero_count(0);
        for zeros in 1..=12 {
            let tier = SoulAge::from_zero_count(zeros);
            assert!(tier >= prev, "zeros = {zeros}");
            prev = tier;
        }
    }

    #[test]
    fn indices_and_dimensions() {
        for (i, age) in ALL_SOUL_AGES.iter().enumerate() {
            assert_eq!(age.index() as usize, i);
            assert_eq!(age.dimension() as usize, i + 3);
            assert!(!age.label().is_empty());
        }
    }
}
