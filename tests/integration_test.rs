// Integration tests for event persistence and the calendar views built on it
mod fixtures;

use chrono::NaiveDate;
use event_calendar::models::event::EventDraft;
use event_calendar::models::settings::Settings;
use event_calendar::services::calendar::{
    classify, events_for_day, filter_events, generate_grid, sort_by_start, TimeBucket,
};
use event_calendar::services::database::Database;
use event_calendar::services::event::{EventError, EventService};
use event_calendar::services::settings::{SettingsService, CONFIG_FILE_NAME};
use fixtures::{dates, drafts::draft, events};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Database {
    let path = dir.path().join("events.db");
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

#[test]
fn test_events_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();

    // Simulate first launch
    let id = {
        let db = open(&dir);
        let service = EventService::new(db.connection());
        let event = service
            .create(&draft("Standup", "2024-06-10T09:00", Some("2024-06-10T09:30")))
            .expect("Failed to create event");
        event.id
    }; // Database connection closed

    // Simulate second launch
    let db = open(&dir);
    let service = EventService::new(db.connection());
    let event = service.get(&id).unwrap().expect("Event should persist");

    assert_eq!(event.title, "Standup");
    assert_eq!(event.start, dates::local(2024, 6, 10, 9, 0));
    assert_eq!(event.end, Some(dates::local(2024, 6, 10, 9, 30)));
    assert_eq!(event.color, "#3B82F6");
    assert!(event.created_at.is_some());
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir);
    EventService::new(db.connection())
        .create(&draft("Standup", "2024-06-10T09:00", None))
        .unwrap();

    db.initialize_schema().expect("Second initialization should succeed");
    assert_eq!(EventService::new(db.connection()).list_all().unwrap().len(), 1);
}

#[test]
fn test_edit_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir);
    let service = EventService::new(db.connection());

    let created = service
        .create(&draft("Offsite", "2024-06-12", Some("2024-06-14")))
        .unwrap();

    // Move the start and clear the end in one patch
    let patch = EventDraft {
        start_date: Some("2024-06-13".to_string()),
        end_date: Some(None),
        location: Some("  Lake House ".to_string()),
        ..Default::default()
    };
    let updated = service.update(&created.id, &patch).unwrap();
    assert_eq!(updated.title, "Offsite");
    assert_eq!(updated.end, None);
    assert_eq!(updated.location.as_deref(), Some("Lake House"));

    // A patch leaving end before start is refused and changes nothing
    let bad = EventDraft {
        end_date: Some(Some("2024-06-01".to_string())),
        ..Default::default()
    };
    assert!(matches!(
        service.update(&created.id, &bad),
        Err(EventError::Validation(_))
    ));
    assert_eq!(service.get(&created.id).unwrap().unwrap(), updated);

    service.delete(&created.id).unwrap();
    assert!(service.get(&created.id).unwrap().is_none());
    assert!(matches!(
        service.delete(&created.id),
        Err(EventError::NotFound(_))
    ));
}

#[test]
fn test_month_view_from_stored_events() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir);
    let service = EventService::new(db.connection());

    service
        .create(&draft("Offsite", "2024-06-12T00:00", Some("2024-06-14T23:59")))
        .unwrap();
    service
        .create(&draft("Standup", "2024-06-10T09:00", Some("2024-06-10T09:30")))
        .unwrap();
    service
        .create(&draft("Retro", "2024-05-31T16:00", None))
        .unwrap();

    let grid = generate_grid(dates::june_2024());
    let (first, last) = (grid[0], grid[grid.len() - 1]);
    let visible = service
        .find_by_date_range(
            dates::local(2024, 5, 26, 0, 0),
            dates::local(2024, 7, 6, 23, 59),
        )
        .unwrap();
    assert_eq!(first, NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());
    assert_eq!(last, NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
    assert_eq!(visible.len(), 3);

    let busy_days: Vec<u32> = grid
        .iter()
        .filter(|day| !events_for_day(&visible, **day).is_empty())
        .map(|day| chrono::Datelike::day(day))
        .collect();
    assert_eq!(busy_days, vec![31, 10, 12, 13, 14]);
}

#[test]
fn test_list_view_groups_and_search() {
    let all = events::all();
    let sorted = sort_by_start(&all);
    let buckets = classify(&sorted, dates::now());

    let titles = |bucket: TimeBucket| -> Vec<String> {
        buckets
            .get(bucket)
            .iter()
            .map(|event| event.title.clone())
            .collect()
    };
    assert_eq!(titles(TimeBucket::Today), vec!["Standup"]);
    assert_eq!(titles(TimeBucket::Tomorrow), vec!["Dentist"]);
    assert_eq!(titles(TimeBucket::ThisWeek), vec!["Team Offsite"]);
    assert_eq!(titles(TimeBucket::Later), vec!["RustConf"]);
    assert_eq!(titles(TimeBucket::Past), vec!["Retro"]);
    assert_eq!(buckets.len(), all.len());

    let found = filter_events(&all, "montreal");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "evt-conference");
    assert_eq!(filter_events(&all, "  ").len(), all.len());
}

#[test]
fn test_settings_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("nested").join(CONFIG_FILE_NAME));

    // Defaults before anything is written
    let mut settings = service.get().expect("Failed to get settings");
    assert_eq!(settings, Settings::default());

    settings.database_path = Some("calendar.db".into());
    service.update(&settings).expect("Failed to update settings");

    let loaded = service.get().expect("Failed to load settings");
    assert_eq!(loaded, settings);
    assert_eq!(
        service.database_path(&loaded).unwrap(),
        dir.path().join("nested").join("calendar.db")
    );
}
