//! Date parsing and age calculation.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Ages above this are treated as bad data.
pub const MAX_PLAUSIBLE_AGE: u32 = 150;

/// Parse a stored date: `YYYY-MM-DD`, an RFC 3339 timestamp, or a timestamp
/// without offset.
///
/// RFC 3339 timestamps are read as the local calendar date, so a birth date
/// saved as local midnight in UTC (`2005-06-23T22:00:00.000Z` at UTC+2) comes
/// back as the day that was entered.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Whole years between `dob` and `today`.
///
/// `None` when the input is missing or unparseable, lies in the future, or
/// yields more than [`MAX_PLAUSIBLE_AGE`] years.
///
/// ```rust
/// use astro_stats::roster::calculate_age;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(calculate_age(Some("1990-01-01"), today), Some(34));
/// assert_eq!(calculate_age(Some("invalid-date"), today), None);
/// ```
pub fn calculate_age(dob: Option<&str>, today: NaiveDate) -> Option<u32> {
    let birth = parse_date(dob?)?;
    let age = today.years_since(birth)?;
    (age <= MAX_PLAUSIBLE_AGE).then_some(age)
}

/// [`calculate_age`] against the local current date.
pub fn age_today(dob: Option<&str>) -> Option<u32> {
    calculate_age(dob, Local::now().date_naive())
}
