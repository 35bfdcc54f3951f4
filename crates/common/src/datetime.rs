//! Date utilities for test records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date layouts accepted for the `Test Date` column, tried in order
const DATE_FORMATS: [&str; 6] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y", "%d %b %Y", "%b %d, %Y"];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Parse a test date.
///
/// Supports ISO dates (`2024-03-01`), US dates (`03/01/2024`), a few
/// spelled-out month layouts, naive timestamps and RFC 3339 timestamps; the
/// time part is discarded.
///
/// # Examples
///
/// ```
/// use athlete_insights_common::datetime::parse_test_date;
///
/// let date = parse_test_date("03/01/2024").expect("Failed to parse");
/// assert_eq!(date.to_string(), "2024-03-01");
/// ```
pub fn parse_test_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Test date is empty".to_string());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| format!("Failed to parse test date '{}'", trimmed))
}

/// Format a date the way record files store it (ISO 8601)
pub fn format_test_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_and_us_dates() {
        assert_eq!(parse_test_date("2024-03-01"), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_test_date(" 03/01/2024 "), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_test_date("2024/03/01"), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_test_date("1 Mar 2024"), Ok(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_parse_timestamps() {
        assert_eq!(parse_test_date("2024-03-01 09:30:00"), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_test_date("2024-03-01T09:30:00Z"), Ok(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_test_date("").is_err());
        assert!(parse_test_date("next tuesday").is_err());
        assert!(parse_test_date("2024-13-45").is_err());
    }

    #[test]
    fn test_format_roundtrip() {
        let date = ymd(2023, 12, 1);
        assert_eq!(parse_test_date(&format_test_date(&date)), Ok(date));
    }
}
