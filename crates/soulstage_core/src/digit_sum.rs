//! Iterative cross-sum (digit-sum) reduction.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of a slice of single decimal digits.
pub fn sum_digits(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// A number together with its digit-sum reductions.
///
/// `second` is present only when `first` has more than one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitChain {
    pub total: u32,
    pub first: u32,
    pub second: Option<u32>,
}

/// Reduce `n` to its digit-sum chain.
pub const fn reduce(n: u32) -> DigitChain {
    let first = digit_sum(n);
    let second = if first > 9 {
        Some(digit_sum(first))
    } else {
        None
    };
    DigitChain {
        total: n,
        first,
        second,
    }
}

impl DigitChain {
    /// Slash-separated text segments as displayed: `[total]` below 10,
    /// otherwise `[total, first]` or `[total, first, second]`.
    pub fn segments(&self) -> Vec<String> {
        if self.total < 10 {
            return vec![self.total.to_string()];
        }
        let mut parts = vec![self.total.to_string(), self.first.to_string()];
        if let Some(second) = self.second {
            parts.push(second.to_string());
        }
        parts
    }
}

impl Display for DigitChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

impl Serialize for DigitChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
