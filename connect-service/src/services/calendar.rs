//! Date parsing and timestamp formatting for user records

use chrono::{DateTime, NaiveDate, SecondsFormat};
use thiserror::Error;

/// The only accepted `date_of_birth` layout (`YYYY-MM-DD`)
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("date_of_birth {0:?} must use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("created_on {0} is out of range")]
    TimestampOutOfRange(i64),
}

pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value, DATE_OF_BIRTH_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

/// Full English weekday name, e.g. `Tuesday`
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Format epoch seconds as an RFC 3339 UTC timestamp (`2009-02-14T02:29:24Z`)
pub fn format_created_on(epoch_secs: i64) -> Result<String, CalendarError> {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|timestamp| timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or(CalendarError::TimestampOutOfRange(epoch_secs))
}
