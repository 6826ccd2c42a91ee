//! Ordering and searching of event lists.

use crate::models::event::Event;

/// A new list ordered by ascending start; ties keep their input order.
pub fn sort_by_start<'a, I>(events: I) -> Vec<Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<Event> = events.into_iter().cloned().collect();
    sorted.sort_by_key(|event| event.start);
    sorted
}

/// Case-insensitive search over title, description and location.
///
/// A blank query matches everything. Otherwise the query is matched as
/// typed, surrounding spaces included.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    if query.trim().is_empty() {
        return events.iter().collect();
    }
    let query = query.to_lowercase();

    let contains = |text: Option<&str>| {
        text.map(|t| t.to_lowercase().contains(&query))
            .unwrap_or(false)
    };

    events
        .iter()
        .filter(|event| {
            contains(Some(&event.title))
                || contains(event.description.as_deref())
                || contains(event.location.as_deref())
        })
        .collect()
}
