use chrono::{DateTime, Local, SecondsFormat, SubsecRound, Utc};
use rusqlite::{self, Row};

use crate::models::event::Event;

/// Column list shared by every event query, in `map_event_row` order.
pub(crate) const EVENT_COLUMNS: &str = "id, title, description, start_datetime, end_datetime,
        is_all_day, color, location, created_at, updated_at";

/// Timestamps are stored as fixed-width UTC RFC 3339 so text order matches
/// chronological order.
pub(crate) fn to_storage(value: DateTime<Local>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drop precision the storage format cannot keep, so a returned event
/// compares equal to the same event read back later.
pub(crate) fn stored_precision(value: DateTime<Local>) -> DateTime<Local> {
    value.trunc_subsecs(3)
}

pub(crate) fn to_local_datetime(value: String) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Trim optional text and store empty values as NULL.
pub(crate) fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

pub(crate) fn map_event_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        start: to_local_datetime(row.get::<_, String>(3)?)?,
        end: row
            .get::<_, Option<String>>(4)?
            .map(to_local_datetime)
            .transpose()?,
        all_day: row.get::<_, i32>(5)? != 0,
        color: row.get(6)?,
        location: row.get(7)?,
        created_at: Some(to_local_datetime(row.get::<_, String>(8)?)?),
        updated_at: Some(to_local_datetime(row.get::<_, String>(9)?)?),
    })
}
