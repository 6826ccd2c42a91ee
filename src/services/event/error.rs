use thiserror::Error;

/// Failures surfaced by the event service.
///
/// Validation and not-found are kept apart from storage failures so callers
/// can show the messages or refresh a stale list instead of bailing out.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid event: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for EventError {
    fn from(err: rusqlite::Error) -> Self {
        EventError::Storage(err.into())
    }
}

pub type EventResult<T> = std::result::Result<T, EventError>;
