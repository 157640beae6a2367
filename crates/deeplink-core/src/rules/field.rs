//! Field rules
//!
//! A rule decides whether a raw string is acceptable and what value it
//! becomes in the validated params.

use crate::types::ParamValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2^64, the first float above every `u64`
const U64_UPPER_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Rule applied to a single raw field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Any non-empty string, kept as a string
    NonEmpty,
    /// A positive integer, coerced to `ParamValue::Number`
    PositiveInteger,
}

impl FieldRule {
    /// Whether `raw` satisfies the rule
    pub fn check(&self, raw: &str) -> bool {
        self.coerce(raw).is_some()
    }

    /// Validated value for `raw`, or `None` if the rule rejects it
    pub fn coerce(&self, raw: &str) -> Option<ParamValue> {
        match self {
            FieldRule::NonEmpty => (!raw.is_empty()).then(|| ParamValue::from(raw)),
            FieldRule::PositiveInteger => parse_positive_integer(raw).map(ParamValue::Number),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRule::NonEmpty => "non_empty",
            FieldRule::PositiveInteger => "positive_integer",
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a raw string to a positive integer.
///
/// Surrounding whitespace (Unicode whitespace and the byte-order mark) is
/// ignored. Decimal integer literals must fit in a `u64`, as must unsigned
/// `0x`, `0o` and `0b` literals. Other numeric forms (`12.0`, `1e3`) are
/// accepted when they denote a whole number. Zero, negatives, fractions,
/// `NaN` and infinities are rejected.
pub fn parse_positive_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if let Some(n) = parse_prefixed_integer(trimmed) {
        return n.filter(|n| *n > 0);
    }

    if let Ok(n) = trimmed.parse::<u64>() {
        return (n > 0).then_some(n);
    }

    let n = trimmed.parse::<f64>().ok()?;
    if n.is_finite() && n > 0.0 && n.fract() == 0.0 && n < U64_UPPER_BOUND {
        Some(n as u64)
    } else {
        None
    }
}

/// `Some(value)` when `s` carries a radix prefix, `None` otherwise.
///
/// Digits must follow the prefix directly; signs are not allowed.
fn parse_prefixed_integer(s: &str) -> Option<Option<u64>> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(FieldRule::NonEmpty.check("severa"));
        assert!(FieldRule::NonEmpty.check(" "));
        assert!(!FieldRule::NonEmpty.check(""));
        assert_eq!(
            FieldRule::NonEmpty.coerce("105ab44"),
            Some(ParamValue::String("105ab44".to_string()))
        );
    }

    #[test]
    fn test_positive_integer_plain() {
        assert_eq!(parse_positive_integer("102226"), Some(102226));
        assert_eq!(parse_positive_integer("1"), Some(1));
        assert_eq!(parse_positive_integer("007"), Some(7));
        assert_eq!(parse_positive_integer("+5"), Some(5));
        assert_eq!(parse_positive_integer(" 42 "), Some(42));
        assert_eq!(
            parse_positive_integer("18446744073709551615"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_positive_integer_whole_floats() {
        assert_eq!(parse_positive_integer("12.0"), Some(12));
        assert_eq!(parse_positive_integer("1e3"), Some(1000));
        assert_eq!(parse_positive_integer("12."), Some(12));
        assert_eq!(parse_positive_integer(".5e1"), Some(5));
    }

    #[test]
    fn test_positive_integer_rejections() {
        for raw in [
            "", "   ", "abc", "10.5", "0", "0.0", "-3", "-0", "NaN", "inf", "infinity", "1e30",
            "12abc", "0x", "0x0", "0x+10", "-0x10", "0b102", "0o8", "0x10000000000000000",
        ] {
            assert_eq!(parse_positive_integer(raw), None, "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_positive_integer_radix_literals() {
        assert_eq!(parse_positive_integer("0x10"), Some(16));
        assert_eq!(parse_positive_integer("0XfF"), Some(255));
        assert_eq!(parse_positive_integer("0b101"), Some(5));
        assert_eq!(parse_positive_integer("0o7"), Some(7));
        assert_eq!(parse_positive_integer(" 0x10 "), Some(16));
    }

    #[test]
    fn test_positive_integer_unicode_whitespace() {
        assert_eq!(parse_positive_integer("\u{a0}5"), Some(5));
        assert_eq!(parse_positive_integer("\u{b}5"), Some(5));
        assert_eq!(parse_positive_integer("\u{feff}5\u{2028}"), Some(5));
        assert_eq!(parse_positive_integer("\t12\n"), Some(12));
        assert_eq!(parse_positive_integer("\u{a0}"), None);
    }

    #[test]
    fn test_positive_integer_coerces_to_number() {
        assert_eq!(
            FieldRule::PositiveInteger.coerce("102226"),
            Some(ParamValue::Number(102226))
        );
        assert!(!FieldRule::PositiveInteger.check("abc"));
    }
}
