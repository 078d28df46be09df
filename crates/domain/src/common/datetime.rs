//! Calendar helpers for birth-date handling.

use chrono::{DateTime, Datelike, Months, NaiveDate};

use crate::error::DomainError;

/// Parses a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep only their date part, in the offset they were written in.
///
/// # Examples
///
/// ```
/// use superhero_domain::common::parse_date;
/// use chrono::Datelike;
///
/// assert_eq!(parse_date("1980-02-19").unwrap().year(), 1980);
/// assert_eq!(parse_date("1980-02-19T00:00:00Z").unwrap().day(), 19);
/// ```
///
/// # Errors
///
/// Returns `DomainError::Validation` when neither format matches.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    // Offset-less ISO timestamps, e.g. "1980-02-19T00:00:00"
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|timestamp| timestamp.date())
        .map_err(|_| DomainError::validation(format!("'{value}' is not a valid date")))
}

/// Same calendar day `years` years earlier.
///
/// February 29th falls back to February 28th in non-leap years.
pub fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(years.saturating_mul(12)))
}

/// Whole years elapsed between `birth` and `today`.
///
/// One year is subtracted when this year's birthday has not happened yet.
/// A birth date in the future yields a negative age.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    let anniversary = if age >= 0 {
        years_before(today, age.unsigned_abs())
    } else {
        today.checked_add_months(Months::new(age.unsigned_abs().saturating_mul(12)))
    };
    if anniversary.is_some_and(|anniversary| birth > anniversary) {
        age -= 1;
    }
    age
}
