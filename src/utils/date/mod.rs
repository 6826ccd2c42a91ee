// Date utility functions
// Civil-date boundaries and lenient parsing of user-supplied timestamps

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub mod format;

pub use format::{format_date, format_date_time, format_duration, format_time};

/// Wall-clock formats accepted in addition to RFC 3339.
const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// First instant of a civil day (00:00:00).
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Last representable instant of a civil day (23:59:59.999999999).
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + Duration::days(1) - Duration::nanoseconds(1)
}

/// Parse a timestamp the way the event forms and API accept them.
///
/// Accepts RFC 3339 (`2024-06-10T09:00:00Z`, `2024-06-10T09:00:00+02:00`),
/// local wall-clock values (`2024-06-10T09:00`, `2024-06-10 09:00:00`) and
/// bare dates (`2024-06-10`, read as local midnight).
///
/// Returns `None` for anything unparseable, or for a wall-clock time that
/// does not exist locally (inside a DST gap).
///
/// # Examples
/// ```
/// use event_calendar::utils::date::parse_datetime;
///
/// assert!(parse_datetime("2024-06-10T09:00").is_some());
/// assert!(parse_datetime("not a date").is_none());
/// ```
pub fn parse_datetime(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(start_of_day)
        })?;

    Local.from_local_datetime(&naive).earliest()
}
