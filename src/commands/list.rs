use anyhow::Result;
use chrono::{DateTime, Local};
use event_calendar::models::event::Event;
use event_calendar::services::calendar::{classify, filter_events, sort_by_start};
use event_calendar::services::database::Database;
use event_calendar::services::event::EventService;

use super::{report, summary_line};

pub fn run(db: &Database, query: Option<&str>, now: DateTime<Local>) -> Result<()> {
    let service = EventService::new(db.connection());
    let events = service.list_all().map_err(report)?;

    let matching = filter_events(&events, query.unwrap_or_default());
    let sorted = sort_by_start(matching);

    print!("{}", render_list(&sorted, now));
    Ok(())
}

/// Events grouped by relative time; empty groups are left out.
pub(crate) fn render_list(events: &[Event], now: DateTime<Local>) -> String {
    if events.is_empty() {
        return "No events.\n".to_string();
    }

    let buckets = classify(events, now);
    let mut lines = Vec::new();

    for (bucket, bucket_events) in buckets.iter().filter(|(_, group)| !group.is_empty()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", bucket.label(), bucket_events.len()));
        for event in bucket_events {
            lines.push(format!("  {}", summary_line(event)));
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
