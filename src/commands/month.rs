use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use event_calendar::models::event::Event;
use event_calendar::services::calendar::{events_for_day, generate_grid, is_in_month};
use event_calendar::services::database::Database;
use event_calendar::services::event::EventService;
use event_calendar::utils::date::{end_of_day, start_of_day};

use super::{report, summary_line};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 7;

pub fn run(db: &Database, month: Option<&str>, now: DateTime<Local>) -> Result<()> {
    let reference = match month {
        Some(value) => parse_month(value)?,
        None => now.date_naive(),
    };

    let grid = generate_grid(reference);
    let (Some(first), Some(last)) = (grid.first(), grid.last()) else {
        return Ok(());
    };

    let service = EventService::new(db.connection());
    let events = service
        .find_by_date_range(to_local(start_of_day(*first)), to_local(end_of_day(*last)))
        .map_err(report)?;

    print!("{}", render_month(reference, now.date_naive(), &events));
    Ok(())
}

/// Parse `YYYY-MM` into the first day of that month.
pub(crate) fn parse_month(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", value))
}

fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Grid of the month followed by the events of each day that has any.
///
/// Days outside the month are shown in parentheses, today is marked with
/// `*` and `+n` gives the number of events on a day.
pub(crate) fn render_month(reference: NaiveDate, today: NaiveDate, events: &[Event]) -> String {
    let grid = generate_grid(reference);
    let mut lines = Vec::new();

    let title = reference.format("%B %Y").to_string();
    lines.push(format!("{:^width$}", title, width = CELL_WIDTH * 7));
    lines.push(
        DAY_NAMES
            .iter()
            .map(|name| format!("{:^width$}", name, width = CELL_WIDTH))
            .collect::<String>(),
    );

    for week in grid.chunks(7) {
        let row: String = week
            .iter()
            .map(|day| {
                let count = events_for_day(events, *day).len();
                format!(
                    "{:^width$}",
                    cell_label(*day, reference, today, count),
                    width = CELL_WIDTH
                )
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    for day in grid.iter().filter(|day| is_in_month(**day, reference)) {
        let day_events = events_for_day(events, *day);
        if day_events.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(day.format("%A, %B %-d").to_string());
        for event in day_events {
            lines.push(format!("  {}", summary_line(event)));
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn cell_label(day: NaiveDate, reference: NaiveDate, today: NaiveDate, count: usize) -> String {
    let mut label = if is_in_month(day, reference) {
        day.day().to_string()
    } else {
        format!("({})", day.day())
    };
    if day == today {
        label.push('*');
    }
    if count > 0 {
        label.push_str(&format!("+{}", count));
    }
    label
}
