// Property-based tests for the calendar engine
// Random months, instants and event lists checked against the invariants the views rely on

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};
use event_calendar::models::event::Event;
use event_calendar::services::calendar::{
    classify, generate_grid, is_event_on_day, is_in_month, month_bounds, sort_by_start,
};
use event_calendar::services::event::{validate_event, ValidationMode};
use proptest::prelude::*;
use serde_json::json;

fn local(days_from_2024: i64, minutes: i64) -> DateTime<Local> {
    // Noon anchors avoid daylight-saving gaps at midnight
    Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        + Duration::days(days_from_2024)
        + Duration::minutes(minutes)
}

fn event(id: usize, start: DateTime<Local>, length_minutes: Option<i64>) -> Event {
    let mut builder = Event::builder()
        .id(format!("evt-{}", id))
        .title(format!("Event {}", id))
        .start(start);
    if let Some(length) = length_minutes {
        builder = builder.end(start + Duration::minutes(length));
    }
    builder.build().unwrap()
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        (0..400i64, -600..600i64, prop::option::of(0..5000i64)),
        0..30,
    )
    .prop_map(|rows| {
        rows
            .into_iter()
            .enumerate()
            .map(|(i, (day, minutes, length))| event(i, local(day, minutes), length))
            .collect()
    })
}

proptest! {
    /// Property: the grid is whole weeks, Sunday to Saturday, with no gaps
    #[test]
    fn prop_grid_is_contiguous_whole_weeks(
        year in 1990..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = generate_grid(reference);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() == 35 || grid.len() == 42 || grid.len() == 28);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sat);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    /// Property: the grid covers every day of the month, and only the
    /// padding days fall outside it
    #[test]
    fn prop_grid_covers_month(
        year in 1990..2100i32,
        month in 1..=12u32,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let (first, last) = month_bounds(reference);
        let grid = generate_grid(reference);

        prop_assert!(grid.contains(&first));
        prop_assert!(grid.contains(&last));
        let in_month = grid.iter().filter(|d| is_in_month(**d, reference)).count();
        prop_assert_eq!(in_month as i64, (last - first).num_days() + 1);
        prop_assert!(grid[0] > first - Duration::days(7));
        prop_assert!(grid[grid.len() - 1] < last + Duration::days(7));
    }

    /// Property: an event occupies its start day and its end day, even
    /// when it starts a fraction of a second before midnight
    #[test]
    fn prop_event_matches_its_boundary_days(
        day in 0..400i64,
        minutes in -600..600i64,
        millis in 0..60_000i64,
        length in prop::option::of(0..10_000i64),
    ) {
        let start = local(day, minutes) + Duration::milliseconds(millis);
        let e = event(0, start, length);
        prop_assert!(is_event_on_day(&e, e.start.date_naive()));
        prop_assert!(is_event_on_day(&e, e.effective_end().date_naive()));
        let before = e.start.date_naive().pred_opt().unwrap();
        let after = e.effective_end().date_naive().succ_opt().unwrap();
        prop_assert!(!is_event_on_day(&e, before));
        prop_assert!(!is_event_on_day(&e, after));
    }

    /// Property: classification puts every event in exactly one group
    #[test]
    fn prop_classify_partitions(
        events in arb_events(),
        now_day in 0..400i64,
        now_minutes in -600..600i64,
    ) {
        let buckets = classify(&events, local(now_day, now_minutes));
        prop_assert_eq!(buckets.len(), events.len());

        for e in &events {
            let hits = buckets
                .iter()
                .filter(|(_, group)| group.iter().any(|candidate| candidate.id == e.id))
                .count();
            prop_assert_eq!(hits, 1);
        }
    }

    /// Property: sorting orders by start, is stable and is idempotent
    #[test]
    fn prop_sort_by_start(events in arb_events()) {
        let sorted = sort_by_start(&events);
        prop_assert_eq!(sorted.len(), events.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
            if pair[0].start == pair[1].start {
                let position = |id: &str| events.iter().position(|e| e.id == id);
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
        prop_assert_eq!(sort_by_start(&sorted), sorted);
    }

    /// Property: a well-formed candidate passes iff its end is not before its start
    #[test]
    fn prop_validation_checks_range(
        title in "[A-Za-z][A-Za-z ]{0,40}",
        start_minutes in 0..100_000i64,
        end_offset in -5000..5000i64,
    ) {
        let start = local(0, start_minutes);
        let end = start + Duration::minutes(end_offset);
        let errors = validate_event(
            &json!({
                "title": title,
                "startDate": start.to_rfc3339(),
                "endDate": end.to_rfc3339(),
            }),
            ValidationMode::Create,
        );

        if end_offset >= 0 {
            prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        } else {
            prop_assert_eq!(errors, vec!["End date must be after start date".to_string()]);
        }
    }
}
