use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// On-disk representation of event start and end times.
pub const RECORD_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INPUT_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid datetime format: expected YYYY-MM-DD HH:MM:SS")]
    InvalidDateTime,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a stored date field. The empty string means "no date".
pub fn parse_record_datetime(raw: &str) -> Result<Option<NaiveDateTime>, TimeParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, RECORD_DATETIME_FORMAT)
        .map(Some)
        .map_err(|_| TimeParseError::InvalidDateTime)
}

pub fn format_record_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(RECORD_DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Lenient parser for user input: a bare date means midnight.
pub fn parse_datetime_input(input: &str) -> Result<NaiveDateTime, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or(TimeParseError::InvalidDate);
    }

    for fmt in INPUT_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    Err(TimeParseError::InvalidDateTime)
}

pub fn parse_date_input(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| TimeParseError::InvalidDateFormat)
}

#[cfg(test)]
mod tests {
    use super::{
        format_record_datetime, parse_date_input, parse_datetime_input, parse_record_datetime,
        TimeParseError,
    };
    use chrono::NaiveDate;

    #[test]
    fn record_datetime_roundtrips_through_text() {
        let parsed = parse_record_datetime("2000-01-01 01:01:01")
            .expect("parse")
            .expect("some");
        assert_eq!(format_record_datetime(Some(parsed)), "2000-01-01 01:01:01");
    }

    #[test]
    fn empty_record_datetime_is_absent() {
        assert_eq!(parse_record_datetime(""), Ok(None));
        assert_eq!(format_record_datetime(None), "");
    }

    #[test]
    fn record_datetime_requires_seconds() {
        assert_eq!(
            parse_record_datetime("2000-01-01 01:01"),
            Err(TimeParseError::InvalidDateTime)
        );
    }

    #[test]
    fn datetime_input_accepts_date_only() {
        let dt = parse_datetime_input("2030-01-15").expect("parse");
        assert_eq!(dt.to_string(), "2030-01-15 00:00:00");
    }

    #[test]
    fn datetime_input_accepts_minutes() {
        let dt = parse_datetime_input("2030-01-15 13:45").expect("parse");
        assert_eq!(dt.to_string(), "2030-01-15 13:45:00");
    }

    #[test]
    fn datetime_input_rejects_empty() {
        assert_eq!(parse_datetime_input("  "), Err(TimeParseError::Empty));
    }

    #[test]
    fn date_input_parses_calendar_day() {
        assert_eq!(
            parse_date_input("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(
            parse_date_input("2023-02-29"),
            Err(TimeParseError::InvalidDateFormat)
        );
    }
}
