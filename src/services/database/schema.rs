use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_events_table(conn)?;
    run_events_migrations(conn)?;
    create_events_indexes(conn)?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            start_datetime TEXT NOT NULL,
            end_datetime TEXT,
            is_all_day INTEGER NOT NULL DEFAULT 0,
            color TEXT NOT NULL DEFAULT '#3B82F6',
            location TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create events table")?;

    Ok(())
}

// Databases created before colors and locations were tracked lack these.
fn run_events_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "events",
        "color",
        "ALTER TABLE events ADD COLUMN color TEXT NOT NULL DEFAULT '#3B82F6'",
    )?;

    migrations::ensure_column(
        conn,
        "events",
        "location",
        "ALTER TABLE events ADD COLUMN location TEXT",
    )?;

    Ok(())
}

fn create_events_indexes(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_datetime)",
        [],
    )
    .context("Failed to create events start index")?;

    Ok(())
}
