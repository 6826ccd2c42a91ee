//! Display formatting for dates, times and event extents.

use chrono::{DateTime, Local};

use crate::models::event::Event;

/// Label shown instead of a time range for all-day events.
pub const ALL_DAY_LABEL: &str = "All day";

/// 12-hour clock with minutes, e.g. `9:05 AM`.
pub fn format_time(date: DateTime<Local>) -> String {
    date.format("%-I:%M %p").to_string()
}

/// Short calendar date, e.g. `Jun 10, 2024`.
pub fn format_date(date: DateTime<Local>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_date_time(date: DateTime<Local>) -> String {
    format!("{} {}", format_date(date), format_time(date))
}

/// Render the time extent of an event for list and detail views.
///
/// All-day events always read "All day". Events without an end show only
/// their start time; otherwise both ends are shown as `start - end`, each
/// with its own AM/PM marker.
pub fn format_duration(event: &Event) -> String {
    if event.all_day {
        return ALL_DAY_LABEL.to_string();
    }

    match event.end {
        None => format_time(event.start),
        Some(end) => format!("{} - {}", format_time(event.start), format_time(end)),
    }
}
