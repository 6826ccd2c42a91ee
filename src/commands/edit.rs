use anyhow::{Context, Result};
use clap::Args;
use event_calendar::models::event::{Event, EventDraft};
use event_calendar::services::database::Database;
use event_calendar::services::event::EventService;
use event_calendar::utils::date::{format_date, format_date_time, format_duration};

use super::{report, resolve_id, short_id};

/// Event fields accepted by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Start, e.g. "2024-06-10T09:00" or "2024-06-10"
    #[arg(short, long)]
    pub start: Option<String>,

    /// End, in the same formats as --start
    #[arg(short, long)]
    pub end: Option<String>,

    /// Mark as an all-day event (or pass false to unmark)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub all_day: Option<bool>,

    /// Hex color such as #3B82F6
    #[arg(short, long)]
    pub color: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,
}

impl EventFields {
    pub fn into_draft(self, clear_end: bool) -> EventDraft {
        let end_date = if clear_end {
            Some(None)
        } else {
            self.end.map(Some)
        };

        EventDraft {
            title: self.title,
            description: self.description,
            start_date: self.start,
            end_date,
            all_day: self.all_day,
            color: self.color,
            location: self.location,
        }
    }
}

pub fn add(db: &Database, fields: EventFields) -> Result<()> {
    let service = EventService::new(db.connection());
    let event = service.create(&fields.into_draft(false)).map_err(report)?;

    println!("Created event [{}]", short_id(&event.id));
    println!("{}", render_event(&event));
    Ok(())
}

pub fn edit(db: &Database, id: &str, fields: EventFields, clear_end: bool) -> Result<()> {
    let draft = fields.into_draft(clear_end);
    if draft.is_empty() {
        anyhow::bail!("Nothing to change; pass at least one field such as --title");
    }

    let service = EventService::new(db.connection());
    let id = resolve_id(&service, id)?;
    let event = service.update(&id, &draft).map_err(report)?;

    println!("Updated event [{}]", short_id(&event.id));
    println!("{}", render_event(&event));
    Ok(())
}

pub fn delete(db: &Database, id: &str) -> Result<()> {
    let service = EventService::new(db.connection());
    let id = resolve_id(&service, id)?;
    service.delete(&id).map_err(report)?;

    println!("Deleted event [{}]", short_id(&id));
    Ok(())
}

pub fn show(db: &Database, id: &str, json: bool) -> Result<()> {
    let service = EventService::new(db.connection());
    let id = resolve_id(&service, id)?;
    let event = service
        .get(&id)
        .map_err(report)?
        .with_context(|| format!("Event {} disappeared while reading it", id))?;

    if json {
        let output = serde_json::to_string_pretty(&event).context("Failed to serialize event")?;
        println!("{}", output);
    } else {
        println!("{}", render_event(&event));
    }
    Ok(())
}

/// Multi-line detail view of one event.
pub(crate) fn render_event(event: &Event) -> String {
    let mut lines = vec![event.title.clone()];

    let date = if event.is_multi_day() {
        format!(
            "{} - {}",
            format_date(event.start),
            format_date(event.effective_end())
        )
    } else {
        format_date(event.start)
    };
    lines.push(format!("  When:     {}, {}", date, format_duration(event)));

    if let Some(location) = &event.location {
        lines.push(format!("  Where:    {}", location));
    }
    if let Some(description) = &event.description {
        lines.push(format!("  Notes:    {}", description));
    }
    lines.push(format!("  Color:    {}", event.color));
    lines.push(format!("  Id:       {}", event.id));
    if let Some(updated_at) = event.updated_at {
        lines.push(format!("  Updated:  {}", format_date_time(updated_at)));
    }

    lines.join("\n")
}
