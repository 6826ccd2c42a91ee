// Test fixtures - reusable test data
// Provides consistent events and drafts across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use event_calendar::models::event::{Event, EventDraft};

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Local time on the given day
    pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap()
    }

    /// Monday Jun 10, 2024 at 08:00, the "now" used by the list tests
    pub fn now() -> DateTime<Local> {
        local(2024, 6, 10, 8, 0)
    }

    /// Jun 15, 2024, a reference date inside June
    pub fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A half-hour meeting on the morning of `dates::now()`
    pub fn standup() -> Event {
        let start = dates::local(2024, 6, 10, 9, 0);
        Event::builder()
            .id("evt-standup")
            .title("Standup")
            .location("Room 4")
            .start(start)
            .end(start + Duration::minutes(30))
            .build()
            .unwrap()
    }

    /// All-day event spanning Jun 12 to Jun 14
    pub fn offsite() -> Event {
        Event::builder()
            .id("evt-offsite")
            .title("Team Offsite")
            .description("Planning for the second half")
            .start(dates::local(2024, 6, 12, 0, 0))
            .end(dates::local(2024, 6, 14, 23, 59))
            .all_day(true)
            .color("#10B981")
            .build()
            .unwrap()
    }

    /// Event with no end date the following day
    pub fn dentist() -> Event {
        Event::builder()
            .id("evt-dentist")
            .title("Dentist")
            .start(dates::local(2024, 6, 11, 15, 30))
            .build()
            .unwrap()
    }

    /// Event that started the previous week
    pub fn retro() -> Event {
        let start = dates::local(2024, 6, 3, 16, 0);
        Event::builder()
            .id("evt-retro")
            .title("Retro")
            .start(start)
            .end(start + Duration::hours(1))
            .build()
            .unwrap()
    }

    /// Event well beyond the coming week
    pub fn conference() -> Event {
        Event::builder()
            .id("evt-conference")
            .title("RustConf")
            .location("Montreal")
            .start(dates::local(2024, 9, 10, 9, 0))
            .end(dates::local(2024, 9, 13, 17, 0))
            .build()
            .unwrap()
    }

    /// All sample events, deliberately out of order
    pub fn all() -> Vec<Event> {
        vec![conference(), standup(), retro(), offsite(), dentist()]
    }
}

/// Sample drafts for the event service
pub mod drafts {
    use super::*;

    pub fn draft(title: &str, start: &str, end: Option<&str>) -> EventDraft {
        EventDraft {
            title: Some(title.to_string()),
            start_date: Some(start.to_string()),
            end_date: end.map(|end| Some(end.to_string())),
            ..Default::default()
        }
    }
}
