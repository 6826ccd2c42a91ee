//! Validation of proposed event data before it reaches storage.
//!
//! One entry point serves both creation and partial updates; the mode only
//! decides whether `title` and `startDate` are required. Every check runs
//! and every message is returned, so a form can show all problems at once.

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::utils::date::parse_datetime;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_LOCATION_LENGTH: usize = 200;

/// Whether the candidate is a new event or a patch to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// How a field appears in the submitted object.
enum Field<'a> {
    /// Missing or `null`.
    Absent,
    Text(&'a str),
    /// Present with a non-string JSON type.
    Other,
}

fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Field<'a> {
    match fields.get(key) {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::String(text)) => Field::Text(text),
        Some(_) => Field::Other,
    }
}

/// Validate a candidate event given as a JSON object with camelCase keys
/// (`title`, `description`, `startDate`, `endDate`, `allDay`, `color`,
/// `location`).
///
/// Returns an empty list when the candidate is acceptable.
///
/// # Examples
/// ```
/// use event_calendar::services::event::validation::{validate_event, ValidationMode};
/// use serde_json::json;
///
/// let errors = validate_event(
///     &json!({ "startDate": "2024-06-10", "endDate": "2024-06-09" }),
///     ValidationMode::Create,
/// );
/// assert_eq!(errors, vec!["Title is required", "End date must be after start date"]);
/// ```
pub fn validate_event(input: &Value, mode: ValidationMode) -> Vec<String> {
    let Some(fields) = input.as_object() else {
        return vec!["Event data must be an object".to_string()];
    };

    let creating = mode == ValidationMode::Create;
    let mut errors = Vec::new();

    match field(fields, "title") {
        Field::Absent if creating => errors.push("Title is required".to_string()),
        Field::Absent => {}
        Field::Text(title) if title.trim().is_empty() => {
            if creating {
                errors.push("Title is required".to_string());
            } else {
                errors.push("Title cannot be empty".to_string());
            }
        }
        Field::Text(title) => check_length(title, MAX_TITLE_LENGTH, "Title", &mut errors),
        Field::Other => errors.push("Title must be a string".to_string()),
    }

    check_optional_text(fields, "description", "Description", MAX_DESCRIPTION_LENGTH, &mut errors);

    let start = match field(fields, "startDate") {
        Field::Absent if creating => {
            errors.push("Start date is required".to_string());
            None
        }
        Field::Absent => None,
        Field::Text(value) if value.trim().is_empty() && creating => {
            errors.push("Start date is required".to_string());
            None
        }
        Field::Text(value) => parse_or_report(value, "Invalid start date", &mut errors),
        Field::Other => {
            errors.push("Start date must be a string".to_string());
            None
        }
    };

    // An empty end date means "no end date".
    let end = match field(fields, "endDate") {
        Field::Absent => None,
        Field::Text(value) if value.trim().is_empty() => None,
        Field::Text(value) => parse_or_report(value, "Invalid end date", &mut errors),
        Field::Other => {
            errors.push("End date must be a string".to_string());
            None
        }
    };

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.push("End date must be after start date".to_string());
        }
    }

    // An empty color means "use the default" (or "keep" on update).
    match field(fields, "color") {
        Field::Absent | Field::Text("") => {}
        Field::Text(color) if is_hex_color(color) => {}
        _ => errors.push("Color must be a valid hex color (e.g., #3B82F6)".to_string()),
    }

    check_optional_text(fields, "location", "Location", MAX_LOCATION_LENGTH, &mut errors);

    match fields.get("allDay") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(_) => errors.push("AllDay must be a boolean".to_string()),
    }

    errors
}

/// `#RRGGBB`, hex digits in either case.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn check_optional_text(
    fields: &Map<String, Value>,
    key: &str,
    label: &str,
    max: usize,
    errors: &mut Vec<String>,
) {
    match field(fields, key) {
        Field::Absent => {}
        Field::Text(text) => check_length(text, max, label, errors),
        Field::Other => errors.push(format!("{} must be a string", label)),
    }
}

fn check_length(text: &str, max: usize, label: &str, errors: &mut Vec<String>) {
    if text.chars().count() > max {
        errors.push(format!("{} must be less than {} characters", label, max));
    }
}

fn parse_or_report(
    value: &str,
    message: &str,
    errors: &mut Vec<String>,
) -> Option<DateTime<Local>> {
    let parsed = parse_datetime(value);
    if parsed.is_none() {
        errors.push(message.to_string());
    }
    parsed
}
