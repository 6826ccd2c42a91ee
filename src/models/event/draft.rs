use serde::{Deserialize, Deserializer, Serialize};

use super::Event;
use crate::services::event::validation::{validate_event, ValidationMode};

/// Proposed event fields, as submitted by a form or API request.
///
/// Every field is optional so the same shape serves creation (where
/// `title` and `startDate` are required) and partial updates (where an
/// absent field means "no change"). Dates stay unparsed strings until
/// validation has accepted them.
///
/// `end_date` distinguishes "absent" (`None`) from an explicit JSON `null`
/// (`Some(None)`), which clears the end date on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EventDraft {
    /// Check the draft and return every problem found (empty when valid).
    pub fn validate(&self, mode: ValidationMode) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(value) => validate_event(&value, mode),
            Err(err) => vec![format!("Event data could not be read: {}", err)],
        }
    }

    /// The end date to apply: `Some(None)` when the draft clears it.
    pub fn end_date_change(&self) -> Option<Option<&str>> {
        self.end_date.as_ref().map(|end| end.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: event.description.clone(),
            start_date: Some(event.start.to_rfc3339()),
            end_date: Some(event.end.map(|end| end.to_rfc3339())),
            all_day: Some(event.all_day),
            color: Some(event.color.clone()),
            location: event.location.clone(),
        }
    }
}

/// Maps a present field to `Some`, so an explicit `null` becomes `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
