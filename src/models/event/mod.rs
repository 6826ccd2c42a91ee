// Event module
// Calendar event record as stored by the event service and read by the views

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::event::validation::ValidationMode;
use crate::utils::date::is_same_day;

mod draft;

pub use draft::EventDraft;

/// Color assigned to events created without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3B82F6";

/// Calendar event.
///
/// The calendar views treat events as immutable values; only the event
/// service creates or changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start: DateTime<Local>,
    #[serde(rename = "endDate")]
    pub end: Option<DateTime<Local>>,
    pub all_day: bool,
    pub color: String,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Local>>,
    pub updated_at: Option<DateTime<Local>>,
}

impl Event {
    /// Create a builder for constructing events with optional fields
    ///
    /// # Examples
    /// ```
    /// use event_calendar::models::event::Event;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let event = Event::builder()
    ///     .title("Team Meeting")
    ///     .start(start)
    ///     .end(start + Duration::hours(1))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(event.color, "#3B82F6");
    /// ```
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// End of the span used for day matching: the end date, or the start
    /// when the event has none.
    pub fn effective_end(&self) -> DateTime<Local> {
        self.end.unwrap_or(self.start)
    }

    /// True when start and end fall on different calendar days.
    pub fn is_multi_day(&self) -> bool {
        match self.end {
            Some(end) => !is_same_day(self.start, end),
            None => false,
        }
    }

    /// Get the duration of the event (zero without an end date)
    pub fn duration(&self) -> Duration {
        self.effective_end() - self.start
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    all_day: bool,
    color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            location: None,
            start: None,
            end: None,
            all_day: false,
            color: None,
        }
    }

    /// Use a fixed id instead of a generated one
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event, running the same checks as event creation.
    ///
    /// Errors are joined into a single message.
    pub fn build(self) -> Result<Event, String> {
        let start = self.start.ok_or("Event start time is required")?;

        let event = Event {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: self.title.unwrap_or_default(),
            description: self.description,
            start,
            end: self.end,
            all_day: self.all_day,
            color: self.color.unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
            location: self.location,
            created_at: None,
            updated_at: None,
        };

        let errors = EventDraft::from(&event).validate(ValidationMode::Create);
        if !errors.is_empty() {
            return Err(errors.join(", "));
        }

        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
