pub mod config;
pub mod edit;
pub mod list;
pub mod month;

use anyhow::{anyhow, bail, Result};
use event_calendar::models::event::Event;
use event_calendar::services::event::{EventError, EventService};
use event_calendar::utils::date::format_duration;

/// Characters of the id shown in listings.
const SHORT_ID_LEN: usize = 8;

pub(crate) fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// One-line summary used by the list and month views.
pub(crate) fn summary_line(event: &Event) -> String {
    let when = if event.is_multi_day() {
        format!(
            "{} - {}",
            event.start.format("%a %b %-d"),
            event.effective_end().format("%a %b %-d")
        )
    } else {
        event.start.format("%a %b %-d").to_string()
    };

    let mut line = format!("{:<12} {:<20} {}", when, format_duration(event), event.title);
    if let Some(location) = &event.location {
        line.push_str(&format!(" @ {}", location));
    }
    line.push_str(&format!("  [{}]", short_id(&event.id)));
    line
}

/// Resolve a full id or a unique id prefix to a stored event id.
pub(crate) fn resolve_id(service: &EventService, id: &str) -> Result<String> {
    if service.get(id).map_err(report)?.is_some() {
        return Ok(id.to_string());
    }

    let matches: Vec<String> = service
        .list_all()
        .map_err(report)?
        .into_iter()
        .map(|event| event.id)
        .filter(|candidate| candidate.starts_with(id))
        .collect();

    match matches.as_slice() {
        [single] => Ok(single.clone()),
        [] => Err(report(EventError::NotFound(id.to_string()))),
        _ => bail!("Id prefix '{}' matches {} events, use more characters", id, matches.len()),
    }
}

/// Turn a service error into a message for the terminal.
pub(crate) fn report(err: EventError) -> anyhow::Error {
    match err {
        EventError::Validation(messages) => {
            eprintln!("The event was not saved:");
            for message in &messages {
                eprintln!("  - {}", message);
            }
            anyhow!("{} problem(s) with the event", messages.len())
        }
        EventError::NotFound(id) => anyhow!(
            "No event with id '{}'; it may have been deleted. Run `calendar list` to see current events.",
            id
        ),
        EventError::Storage(err) => err,
    }
}
