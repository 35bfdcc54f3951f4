//! Cell values of tabular record data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a record batch.
///
/// Test values are polymorphic: numeric for tiered tests, text for the
/// categorical kinds. Conversions below never fail loudly; a cell that is
/// not of the requested shape simply yields `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Integer(i64),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Build a cell from raw text the way file loaders see it.
    ///
    /// Blank text is null; everything else is kept as untrimmed text.
    /// Numeric consumers coerce through [`CellValue::as_number`], so labels
    /// such as `3` and codes such as `007` survive loading unchanged.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Null;
        }
        Self::Text(raw.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the cell.
    ///
    /// Text is coerced when it parses as a finite number after trimming.
    /// NaN and infinities are treated as non-numeric.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Null => return None,
            Self::Integer(i) => *i as f64,
            Self::Number(f) => *f,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Text view of the cell; numbers are not stringified.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(CellValue::from_raw(""), CellValue::Null);
        assert_eq!(CellValue::from_raw("  "), CellValue::Null);
        assert_eq!(CellValue::from_raw("12"), CellValue::Text("12".into()));
        assert_eq!(CellValue::from_raw(" 1.48 "), CellValue::Text(" 1.48 ".into()));
        assert_eq!(CellValue::from_raw(" 1.48 ").as_number(), Some(1.48));
        assert_eq!(CellValue::from_raw("007"), CellValue::Text("007".into()));
        assert_eq!(CellValue::from_raw("Pass"), CellValue::Text("Pass".into()));
        assert_eq!(CellValue::from_raw("NaN"), CellValue::Text("NaN".into()));
    }

    #[test]
    fn test_as_number_coerces_text() {
        assert_eq!(CellValue::from("1.52").as_number(), Some(1.52));
        assert_eq!(CellValue::Integer(3).as_number(), Some(3.0));
        assert_eq!(CellValue::from("fast").as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
        assert_eq!(CellValue::from("NaN").as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_as_text_does_not_stringify_numbers() {
        assert_eq!(CellValue::from("Pain").as_text(), Some("Pain"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
    }

    #[test]
    fn test_untagged_serde() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[null, 3, 1.5, "x"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Null,
                CellValue::Integer(3),
                CellValue::Number(1.5),
                CellValue::Text("x".into())
            ]
        );
    }
}
