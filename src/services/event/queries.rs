use super::error::EventResult;
use super::shared::{map_event_row, to_storage, EVENT_COLUMNS};
use super::EventService;
use crate::models::event::Event;
use chrono::{DateTime, Local};

impl<'a> EventService<'a> {
    /// List every event ordered by start date.
    pub fn list_all(&self) -> EventResult<Vec<Event>> {
        let sql = format!(
            "SELECT {} FROM events ORDER BY start_datetime ASC, created_at ASC",
            EVENT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::debug!("Loaded {} events", events.len());
        Ok(events)
    }

    /// Events whose span (start to end, or just start) overlaps the window.
    pub fn find_by_date_range(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> EventResult<Vec<Event>> {
        let sql = format!(
            "SELECT {} FROM events
             WHERE start_datetime <= ?1
               AND COALESCE(end_datetime, start_datetime) >= ?2
             ORDER BY start_datetime ASC, created_at ASC",
            EVENT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let events = stmt
            .query_map([to_storage(end), to_storage(start)], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::debug!(
            "Found {} events between {} and {}",
            events.len(),
            start,
            end
        );
        Ok(events)
    }
}
