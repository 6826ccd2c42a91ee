use super::error::{EventError, EventResult};
use super::shared::{map_event_row, normalize_text, stored_precision, to_storage, EVENT_COLUMNS};
use super::validation::ValidationMode;
use super::EventService;
use crate::models::event::{Event, EventDraft, DEFAULT_EVENT_COLOR};
use crate::utils::date::parse_datetime;
use anyhow::Context;
use chrono::{DateTime, Local};
use rusqlite::{self, params};
use uuid::Uuid;

impl<'a> EventService<'a> {
    /// Validate a draft and store it as a new event.
    ///
    /// Text fields are trimmed, empty optional text is stored as NULL and a
    /// missing or empty color falls back to [`DEFAULT_EVENT_COLOR`].
    pub fn create(&self, draft: &EventDraft) -> EventResult<Event> {
        reject_invalid(draft, ValidationMode::Create)?;

        let start = parse_field(draft.start_date.as_deref(), "Start date is required")?;
        let end = match draft.end_date_change() {
            Some(Some(value)) => parse_optional_end(value)?,
            _ => None,
        };
        let now = stored_precision(Local::now());

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title.as_deref().unwrap_or_default().trim().to_string(),
            description: normalize_text(draft.description.as_deref()),
            start,
            end,
            all_day: draft.all_day.unwrap_or(false),
            color: draft
                .color
                .clone()
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
            location: normalize_text(draft.location.as_deref()),
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.conn
            .execute(
                "INSERT INTO events (
                    id, title, description, start_datetime, end_datetime,
                    is_all_day, color, location, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    event.id,
                    event.title,
                    event.description,
                    to_storage(event.start),
                    event.end.map(to_storage),
                    event.all_day as i32,
                    event.color,
                    event.location,
                    to_storage(now),
                    to_storage(now),
                ],
            )
            .context("Failed to insert event")?;

        log::info!("Created event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: &str) -> EventResult<Option<Event>> {
        let sql = format!("SELECT {} FROM events WHERE id = ?1", EVENT_COLUMNS);
        let result = self.conn.query_row(&sql, [id], map_event_row);

        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply the fields present in `draft` to an existing event.
    ///
    /// Absent fields are left unchanged; an explicit empty `endDate` (or
    /// JSON `null`) removes the end date. Fails with
    /// [`EventError::NotFound`] for an unknown id.
    pub fn update(&self, id: &str, draft: &EventDraft) -> EventResult<Event> {
        reject_invalid(draft, ValidationMode::Update)?;

        let mut event = self
            .get(id)?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;

        if let Some(title) = &draft.title {
            event.title = title.trim().to_string();
        }
        if let Some(description) = &draft.description {
            event.description = normalize_text(Some(description));
        }
        if let Some(start) = &draft.start_date {
            event.start = parse_field(Some(start), "Invalid start date")?;
        }
        if let Some(end) = draft.end_date_change() {
            event.end = match end {
                Some(value) => parse_optional_end(value)?,
                None => None,
            };
        }
        if let Some(all_day) = draft.all_day {
            event.all_day = all_day;
        }
        if let Some(color) = draft.color.as_ref().filter(|color| !color.is_empty()) {
            event.color = color.clone();
        }
        if let Some(location) = &draft.location {
            event.location = normalize_text(Some(location));
        }

        // The patch alone can be consistent while clashing with stored dates.
        if event.end.is_some_and(|end| end < event.start) {
            let errors = vec!["End date must be after start date".to_string()];
            log::warn!("Rejected update of event {}: {}", id, errors.join(", "));
            return Err(EventError::Validation(errors));
        }

        let now = stored_precision(Local::now());
        let rows_affected = self
            .conn
            .execute(
                "UPDATE events SET
                    title = ?1, description = ?2, start_datetime = ?3, end_datetime = ?4,
                    is_all_day = ?5, color = ?6, location = ?7, updated_at = ?8
                 WHERE id = ?9",
                params![
                    event.title,
                    event.description,
                    to_storage(event.start),
                    event.end.map(to_storage),
                    event.all_day as i32,
                    event.color,
                    event.location,
                    to_storage(now),
                    id,
                ],
            )
            .context("Failed to update event")?;

        if rows_affected == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        event.updated_at = Some(now);
        log::info!("Updated event {}", id);
        Ok(event)
    }

    /// Delete an event by ID.
    pub fn delete(&self, id: &str) -> EventResult<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1", [id])
            .context("Failed to delete event")?;

        if rows_affected == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        log::info!("Deleted event {}", id);
        Ok(())
    }
}

fn reject_invalid(draft: &EventDraft, mode: ValidationMode) -> EventResult<()> {
    let errors = draft.validate(mode);
    if errors.is_empty() {
        return Ok(());
    }

    log::warn!("Rejected event draft: {}", errors.join(", "));
    Err(EventError::Validation(errors))
}

fn parse_field(value: Option<&str>, message: &str) -> EventResult<DateTime<Local>> {
    value
        .and_then(parse_datetime)
        .map(stored_precision)
        .ok_or_else(|| EventError::Validation(vec![message.to_string()]))
}

fn parse_optional_end(value: &str) -> EventResult<Option<DateTime<Local>>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_field(Some(value), "Invalid end date").map(Some)
}
