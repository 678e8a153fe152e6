use super::elements::{Bookmark, BpmChange, Event, Note, Obstacle};
use super::info::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// A converted per-difficulty `.dat` record
///
/// Every collection is always written, empty when the source had none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDifficulty {
    #[serde(rename = "_version")]
    pub version: String,
    #[serde(rename = "_BPMChanges")]
    pub bpm_changes: Vec<BpmChange>,
    #[serde(rename = "_events")]
    pub events: Vec<Event>,
    #[serde(rename = "_notes")]
    pub notes: Vec<Note>,
    #[serde(rename = "_obstacles")]
    pub obstacles: Vec<Obstacle>,
    #[serde(rename = "_bookmarks")]
    pub bookmarks: Vec<Bookmark>,
}

impl Default for NewDifficulty {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            bpm_changes: Vec::new(),
            events: Vec::new(),
            notes: Vec::new(),
            obstacles: Vec::new(),
            bookmarks: Vec::new(),
        }
    }
}
