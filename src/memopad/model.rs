use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single note. Serialized camelCase to match the historical snapshot
/// format; `title` and `content` default so older blobs that predate either
/// field still hydrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            content: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// The whole collection, keyed by note id. This map is what gets serialized
/// as the persisted snapshot and as the export document.
pub type Collection = HashMap<String, Note>;

/// Notes in display order: creation order, reconstructed from `created_at`
/// with the id as tie-break (ids are epoch-millis strings, so two notes
/// minted in the same instant still order by mint sequence).
pub fn ordered(notes: &Collection) -> Vec<&Note> {
    let mut all: Vec<&Note> = notes.values().collect();
    all.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    all
}

/// The human-readable timestamp title: local time with slashes swapped for
/// hyphens, e.g. `08-06-2026, 14:03:59`. Used as the default for the
/// timestamp title policy, for blank renames, and for migration back-fill.
pub fn timestamp_title(at: DateTime<Local>) -> String {
    at.format("%m/%d/%Y, %H:%M:%S").to_string().replace('/', "-")
}
