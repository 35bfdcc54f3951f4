//! Quality-label threshold tables.
//!
//! A threshold table maps continuous metrics to Poor/Fair/Good/Excellent
//! using half-open `[min, max)` intervals. The table is consumed as given;
//! gaps and overlaps are not rejected.

use crate::errors::ReferenceDataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text written for an unbounded upper limit
pub const INFINITY_SYMBOL: &str = "∞";

/// Label reported when no bucket contains a value
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Quality label of a threshold bucket (unordered tags)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLabel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLabel {
    pub const ALL: [QualityLabel; 4] = [Self::Poor, Self::Fair, Self::Good, Self::Excellent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLabel {
    type Err = ReferenceDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ReferenceDataError::InvalidLabel(wanted.to_string()))
    }
}

fn is_infinity_sentinel(text: &str) -> bool {
    text == INFINITY_SYMBOL || text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("infinity")
}

/// Parse an upper bound; the infinity sentinel and blank text mean +∞.
pub fn parse_max_bound(raw: &str) -> Result<f64, ReferenceDataError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_infinity_sentinel(trimmed) {
        return Ok(f64::INFINITY);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ReferenceDataError::InvalidBound(trimmed.to_string())),
    }
}

/// Parse a lower bound, which must be a finite number
pub fn parse_min_bound(raw: &str) -> Result<f64, ReferenceDataError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ReferenceDataError::InvalidBound(trimmed.to_string())),
    }
}

/// Render a bound the way threshold files store it
pub fn format_bound(value: f64) -> String {
    if value == f64::INFINITY {
        INFINITY_SYMBOL.to_string()
    } else {
        value.to_string()
    }
}

/// One (metric, label) row of a threshold table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBucket {
    pub metric: String,
    pub label: QualityLabel,
    pub min: f64,
    pub max: f64,
}

impl ThresholdBucket {
    pub fn new(metric: impl Into<String>, label: QualityLabel, min: f64, max: f64) -> Self {
        Self {
            metric: metric.into(),
            label,
            min,
            max,
        }
    }

    /// Half-open membership: `min <= value < max`
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// Ordered list of threshold buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    buckets: Vec<ThresholdBucket>,
}

/// Names of the built-in metrics, in table order
pub const DEFAULT_METRICS: [&str; 9] = [
    "0-10 Yard Sprint (s)",
    "Fly-10 (s)",
    "Pro-Agility (s)",
    "MTP Peak Force (N)",
    "Chin-Up Strength (Reps)",
    "CMJ (in)",
    "NCMJ (in)",
    "Seated Med Ball Throw (ft)",
    "5-Jump RSI",
];

/// Built-in metrics and their (label, min, max) bounds
const DEFAULT_THRESHOLDS: [(&str, [(QualityLabel, f64, f64); 4]); 9] = {
    use QualityLabel::*;
    const INF: f64 = f64::INFINITY;
    [
        ("0-10 Yard Sprint (s)", [(Poor, 1.8, INF), (Fair, 1.65, 1.8), (Good, 1.5, 1.65), (Excellent, 0.0, 1.5)]),
        ("Fly-10 (s)", [(Poor, 1.2, INF), (Fair, 1.05, 1.2), (Good, 0.9, 1.05), (Excellent, 0.0, 0.9)]),
        ("Pro-Agility (s)", [(Poor, 4.6, INF), (Fair, 4.4, 4.6), (Good, 4.2, 4.4), (Excellent, 0.0, 4.2)]),
        ("MTP Peak Force (N)", [(Poor, 0.0, 2000.0), (Fair, 2000.0, 2300.0), (Good, 2300.0, 2600.0), (Excellent, 2600.0, INF)]),
        ("Chin-Up Strength (Reps)", [(Poor, 0.0, 8.0), (Fair, 8.0, 12.0), (Good, 12.0, 15.0), (Excellent, 15.0, INF)]),
        ("CMJ (in)", [(Poor, 0.0, 25.0), (Fair, 25.0, 27.0), (Good, 27.0, 29.0), (Excellent, 29.0, INF)]),
        ("NCMJ (in)", [(Poor, 0.0, 23.0), (Fair, 23.0, 25.0), (Good, 25.0, 27.0), (Excellent, 27.0, INF)]),
        ("Seated Med Ball Throw (ft)", [(Poor, 0.0, 16.0), (Fair, 16.0, 17.5), (Good, 17.5, 19.0), (Excellent, 19.0, INF)]),
        ("5-Jump RSI", [(Poor, 0.0, 1.9), (Fair, 1.9, 2.1), (Good, 2.1, 2.2), (Excellent, 2.2, INF)]),
    ]
};

impl ThresholdTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_buckets(buckets: Vec<ThresholdBucket>) -> Self {
        Self { buckets }
    }

    /// The built-in table for the nine standard performance metrics
    pub fn defaults() -> Self {
        let buckets = DEFAULT_THRESHOLDS
            .iter()
            .flat_map(|(metric, bounds)| {
                bounds
                    .iter()
                    .map(move |(label, min, max)| ThresholdBucket::new(*metric, *label, *min, *max))
            })
            .collect();
        Self { buckets }
    }

    pub fn push(&mut self, bucket: ThresholdBucket) {
        self.buckets.push(bucket);
    }

    /// Buckets for one metric in table order
    pub fn for_metric<'a>(&'a self, metric: &'a str) -> impl Iterator<Item = &'a ThresholdBucket> + 'a {
        self.buckets.iter().filter(move |b| b.metric == metric)
    }

    /// Distinct metric names in first-appearance order
    pub fn metrics(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for bucket in &self.buckets {
            if !seen.contains(&bucket.metric.as_str()) {
                seen.push(&bucket.metric);
            }
        }
        seen
    }

    pub fn covers(&self, metric: &str) -> bool {
        self.buckets.iter().any(|b| b.metric == metric)
    }

    pub fn buckets(&self) -> &[ThresholdBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_bound() {
        assert_eq!(parse_max_bound("25").unwrap(), 25.0);
        assert_eq!(parse_max_bound(" 17.5 ").unwrap(), 17.5);
        assert_eq!(parse_max_bound("∞").unwrap(), f64::INFINITY);
        assert_eq!(parse_max_bound("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_max_bound("").unwrap(), f64::INFINITY);
        assert!(matches!(
            parse_max_bound("lots"),
            Err(ReferenceDataError::InvalidBound(_))
        ));
    }

    #[test]
    fn test_min_bound_must_be_finite() {
        assert_eq!(parse_min_bound(" 0 ").unwrap(), 0.0);
        assert_eq!(parse_min_bound("1.65").unwrap(), 1.65);
        for raw in ["", "  ", "∞", "inf", "Infinity", "-inf", "lots"] {
            assert!(
                matches!(parse_min_bound(raw), Err(ReferenceDataError::InvalidBound(_))),
                "{raw:?} accepted as a lower bound"
            );
        }
    }

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(f64::INFINITY), "∞");
        assert_eq!(format_bound(1.65), "1.65");
    }

    #[test]
    fn test_bucket_is_half_open() {
        let bucket = ThresholdBucket::new("CMJ (in)", QualityLabel::Fair, 25.0, 27.0);
        assert!(bucket.contains(25.0));
        assert!(bucket.contains(26.99));
        assert!(!bucket.contains(27.0));
        assert!(!bucket.contains(f64::NAN));
    }

    #[test]
    fn test_defaults_cover_nine_metrics() {
        let table = ThresholdTable::defaults();
        assert_eq!(table.metrics(), DEFAULT_METRICS.to_vec());
        assert_eq!(table.len(), 36);
        assert!(table.covers("5-Jump RSI"));
        let labels: Vec<_> = table.for_metric("CMJ (in)").map(|b| b.label).collect();
        assert_eq!(labels, QualityLabel::ALL.to_vec());
    }

    #[test]
    fn test_label_from_str() {
        assert_eq!("excellent".parse::<QualityLabel>().unwrap(), QualityLabel::Excellent);
        assert!("Great".parse::<QualityLabel>().is_err());
    }
}
