//! Which calendar days an event occupies.

use chrono::NaiveDate;

use crate::models::event::Event;

/// True when the event's span touches `day`.
///
/// The span runs from the start to the end date (or just the start when
/// there is no end) and is compared by local civil date, so any instant
/// within a day counts, down to the sub-second. Both boundary days of a
/// multi-day event match, and an event ending exactly at midnight also
/// shows on the day that midnight begins.
pub fn is_event_on_day(event: &Event, day: NaiveDate) -> bool {
    let start_day = event.start.date_naive();
    let end_day = event.effective_end().date_naive();

    start_day <= day && day <= end_day
}

/// The events that occupy `day`, in their original order.
pub fn events_for_day<'a, I>(events: I, day: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| is_event_on_day(event, day))
        .collect()
}
