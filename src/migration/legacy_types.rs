//! Legacy beatmap data types
//!
//! These structures mirror the old `info.json` index and its per-difficulty
//! JSON files. They are only read, never written back. Every field is
//! optional on disk: missing keys, explicit `null`s and values of the wrong
//! JSON type all fall back to the zero value, and unknown keys are ignored.

use crate::schema::lenient::{lenient, lenient_list};
use crate::schema::{Bookmark, BpmChange, Color, Event, Note, Obstacle};
use serde::{Deserialize, Serialize};

/// The legacy `info.json` index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OldInfo {
    #[serde(deserialize_with = "lenient")]
    pub song_name: String,
    #[serde(deserialize_with = "lenient")]
    pub song_sub_name: String,
    #[serde(deserialize_with = "lenient")]
    pub author_name: String,
    #[serde(deserialize_with = "lenient_list")]
    pub contributors: Vec<OldContributor>,
    #[serde(deserialize_with = "lenient")]
    pub beats_per_minute: f64,
    #[serde(deserialize_with = "lenient")]
    pub preview_start_time: f64,
    #[serde(deserialize_with = "lenient")]
    pub preview_duration: f64,
    #[serde(deserialize_with = "lenient")]
    pub cover_image_path: String,
    #[serde(deserialize_with = "lenient")]
    pub environment_name: String,
    /// One-handed map; forces every difficulty into `OneSaber`
    #[serde(deserialize_with = "lenient")]
    pub one_saber: bool,
    #[serde(deserialize_with = "lenient")]
    pub custom_environment: String,
    #[serde(deserialize_with = "lenient")]
    pub custom_environment_hash: String,
    #[serde(deserialize_with = "lenient_list")]
    pub difficulty_levels: Vec<OldDifficultyLevel>,
}

/// A credited contributor in the legacy index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OldContributor {
    #[serde(deserialize_with = "lenient")]
    pub role: String,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub icon_path: String,
}

/// One entry of `difficultyLevels` in the legacy index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OldDifficultyLevel {
    /// Difficulty name (e.g. "Hard", "ExpertPlus")
    #[serde(deserialize_with = "lenient")]
    pub difficulty: String,
    /// Editor ordering hint; the converted rank comes from the name instead
    #[serde(deserialize_with = "lenient")]
    pub difficulty_rank: i64,
    #[serde(deserialize_with = "lenient")]
    pub audio_path: String,
    /// Difficulty data file, relative to the map directory
    #[serde(deserialize_with = "lenient")]
    pub json_path: String,
    #[serde(deserialize_with = "lenient")]
    pub offset: i64,
    #[serde(deserialize_with = "lenient")]
    pub old_offset: i64,
    #[serde(deserialize_with = "lenient")]
    pub chroma_toggle: String,
    #[serde(deserialize_with = "lenient")]
    pub custom_colors: bool,
    /// Free-text game mode ("One Saber", "No Arrows", ...)
    #[serde(deserialize_with = "lenient")]
    pub characteristic: String,
    #[serde(deserialize_with = "lenient")]
    pub difficulty_label: String,
}

/// A legacy per-difficulty data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OldDifficulty {
    #[serde(rename = "_version", deserialize_with = "lenient")]
    pub version: String,
    /// Tempo override; zero means "use the index tempo"
    #[serde(rename = "_beatsPerMinute", deserialize_with = "lenient")]
    pub beats_per_minute: f64,
    #[serde(rename = "_beatsPerBar", deserialize_with = "lenient")]
    pub beats_per_bar: f64,
    #[serde(rename = "_shuffle", deserialize_with = "lenient")]
    pub shuffle: f64,
    #[serde(rename = "_shufflePeriod", deserialize_with = "lenient")]
    pub shuffle_period: f64,
    #[serde(rename = "_noteJumpSpeed", deserialize_with = "lenient")]
    pub note_jump_speed: f64,
    #[serde(rename = "_noteJumpStartBeatOffset", deserialize_with = "lenient")]
    pub note_jump_start_beat_offset: f64,
    #[serde(rename = "_BPMChanges", deserialize_with = "lenient_list")]
    pub bpm_changes: Vec<BpmChange>,
    #[serde(rename = "_events", deserialize_with = "lenient_list")]
    pub events: Vec<Event>,
    #[serde(rename = "_notes", deserialize_with = "lenient_list")]
    pub notes: Vec<Note>,
    #[serde(rename = "_obstacles", deserialize_with = "lenient_list")]
    pub obstacles: Vec<Obstacle>,
    #[serde(rename = "_bookmarks", deserialize_with = "lenient_list")]
    pub bookmarks: Vec<Bookmark>,
    #[serde(rename = "_warnings", deserialize_with = "lenient_list")]
    pub warnings: Vec<String>,
    #[serde(rename = "_information", deserialize_with = "lenient_list")]
    pub information: Vec<String>,
    #[serde(rename = "_suggestions", deserialize_with = "lenient_list")]
    pub suggestions: Vec<String>,
    #[serde(rename = "_requirements", deserialize_with = "lenient_list")]
    pub requirements: Vec<String>,
    #[serde(
        rename = "_colorLeft",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_left: Option<Color>,
    #[serde(
        rename = "_colorRight",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_right: Option<Color>,
}
