//! Calendar event service entry point.
//! Provides database-backed CRUD for events plus the validation that guards
//! every write, organized across focused submodules.

use rusqlite::Connection;

pub mod crud;
pub mod error;
pub mod queries;
mod shared;
pub mod validation;

pub use error::{EventError, EventResult};
pub use validation::{validate_event, ValidationMode};

/// Service for managing calendar events stored in SQLite.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    /// Create a new EventService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
