use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Item ids are creation timestamps in milliseconds since the epoch.
pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    // UI-only flag; never written to storage
    #[serde(skip)]
    pub editing: bool,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            editing: false,
        }
    }

    /// The moment the item was added, recovered from its id.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.id).single()
    }

    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSettings {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: 5,
        }
    }
}
