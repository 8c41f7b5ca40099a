use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse an instant: RFC 3339 datetime, or a bare date taken as midnight UTC.
pub(crate) fn parse_instant(s: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }
    match parse_date(s) {
        Ok(date) => match date.and_hms_opt(0, 0, 0) {
            Some(naive) => Ok(naive.and_utc()),
            None => Err(AppError::InvalidTimestamp {
                input: s.to_string(),
            }),
        },
        Err(_) => Err(AppError::InvalidTimestamp {
            input: s.to_string(),
        }),
    }
}
