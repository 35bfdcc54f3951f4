//! Threshold condition expressions.
//!
//! Catalog authors write one directional bound per tier slot, e.g. `"<=1.50"`
//! or `">4.2"`. Anything that does not have that shape is not a numeric
//! condition; callers decide whether that means "fall back to label matching"
//! or "report it" (see [`Condition::parse_strict`]).

use crate::errors::ConditionError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Operator immediately followed by an optional minus sign and a decimal number.
static CONDITION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(<=|>=|<|>)(-?\d+(?:\.\d+)?)$").unwrap());

/// Comparison operator of a threshold condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
}

impl Comparator {
    /// Textual operator as written in the catalog
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessOrEqual),
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterOrEqual),
            _ => None,
        }
    }

    /// Apply the operator as `value <op> threshold`.
    ///
    /// NaN never satisfies any operator.
    #[inline]
    pub fn evaluate(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Less => value < threshold,
            Self::LessOrEqual => value <= threshold,
            Self::Greater => value > threshold,
            Self::GreaterOrEqual => value >= threshold,
        }
    }
}

/// A parsed single-bound numeric condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub comparator: Comparator,
    pub threshold: f64,
}

impl Condition {
    pub fn new(comparator: Comparator, threshold: f64) -> Self {
        Self {
            comparator,
            threshold,
        }
    }

    /// Parse a condition, returning `None` for blank or non-conforming input.
    ///
    /// ```
    /// use athlete_insights_domain::condition::{Comparator, Condition};
    ///
    /// let cond = Condition::parse(" <=1.50 ").unwrap();
    /// assert_eq!(cond.comparator, Comparator::LessOrEqual);
    /// assert_eq!(cond.threshold, 1.5);
    ///
    /// assert!(Condition::parse("Balanced").is_none());
    /// assert!(Condition::parse("").is_none());
    /// ```
    pub fn parse(expr: &str) -> Option<Self> {
        let captures = CONDITION_REGEX.captures(expr.trim())?;
        let comparator = Comparator::from_symbol(captures.get(1)?.as_str())?;
        let threshold = captures.get(2)?.as_str().parse::<f64>().ok()?;
        Some(Self::new(comparator, threshold))
    }

    /// Parse an optional slot value; absent slots never yield a predicate.
    pub fn parse_slot(expr: Option<&str>) -> Option<Self> {
        expr.and_then(Self::parse)
    }

    /// Like [`Condition::parse`], but a non-blank string that is not a valid
    /// condition is an error instead of "no predicate".
    pub fn parse_strict(expr: &str) -> Result<Option<Self>, ConditionError> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Self::parse(trimmed)
            .map(Some)
            .ok_or_else(|| ConditionError::Malformed(trimmed.to_string()))
    }

    /// Test `value` against this condition
    #[inline]
    pub fn matches(&self, value: f64) -> bool {
        self.comparator.evaluate(value, self.threshold)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator.symbol(), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_operators() {
        assert_eq!(
            Condition::parse("<1"),
            Some(Condition::new(Comparator::Less, 1.0))
        );
        assert_eq!(
            Condition::parse("<=1.55"),
            Some(Condition::new(Comparator::LessOrEqual, 1.55))
        );
        assert_eq!(
            Condition::parse(">4.2"),
            Some(Condition::new(Comparator::Greater, 4.2))
        );
        assert_eq!(
            Condition::parse(">=-3"),
            Some(Condition::new(Comparator::GreaterOrEqual, -3.0))
        );
    }

    #[test]
    fn test_parse_rejects_non_conditions() {
        assert!(Condition::parse("").is_none());
        assert!(Condition::parse("   ").is_none());
        assert!(Condition::parse("Pass").is_none());
        assert!(Condition::parse("==1.5").is_none());
        assert!(Condition::parse("!=1.5").is_none());
        assert!(Condition::parse("<= 1.5").is_none());
        assert!(Condition::parse("1.5-1.6").is_none());
        assert!(Condition::parse("<1.").is_none());
        assert!(Condition::parse("<.5").is_none());
        assert!(Condition::parse_slot(None).is_none());
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(Condition::parse_strict("  ").unwrap(), None);
        assert!(Condition::parse_strict("<=2").unwrap().is_some());
        assert!(matches!(
            Condition::parse_strict("=<2"),
            Err(ConditionError::Malformed(s)) if s == "=<2"
        ));
    }

    #[test]
    fn test_matches_is_false_for_nan() {
        let cond = Condition::new(Comparator::Greater, 1.0);
        assert!(cond.matches(2.0));
        assert!(!cond.matches(1.0));
        assert!(!cond.matches(f64::NAN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Condition::parse("<=1.50").unwrap().to_string(), "<=1.5");
    }
}
