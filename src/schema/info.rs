//! The current `info.dat` index layout

use super::characteristic::Characteristic;
use super::elements::Color;
use serde::{Deserialize, Serialize};

/// Schema version written into every converted record
pub const SCHEMA_VERSION: &str = "2.0.0";

/// Top-level `info.dat` record
///
/// Field order here is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInfo {
    #[serde(rename = "_version")]
    pub version: String,
    #[serde(rename = "_songName")]
    pub song_name: String,
    #[serde(rename = "_songSubName")]
    pub song_sub_name: String,
    #[serde(rename = "_songAuthorName")]
    pub song_author_name: String,
    #[serde(rename = "_levelAuthorName")]
    pub level_author_name: String,
    #[serde(rename = "_beatsPerMinute")]
    pub beats_per_minute: f64,
    #[serde(rename = "_songTimeOffset")]
    pub song_time_offset: f64,
    #[serde(rename = "_shuffle")]
    pub shuffle: f64,
    #[serde(rename = "_shufflePeriod")]
    pub shuffle_period: f64,
    #[serde(rename = "_previewStartTime")]
    pub preview_start_time: f64,
    #[serde(rename = "_previewDuration")]
    pub preview_duration: f64,
    #[serde(rename = "_songFilename")]
    pub song_filename: String,
    #[serde(rename = "_coverImageFilename")]
    pub cover_image_filename: String,
    #[serde(rename = "_environmentName")]
    pub environment_name: String,
    #[serde(rename = "_customData")]
    pub custom_data: InfoCustomData,
    #[serde(rename = "_difficultyBeatmapSets")]
    pub difficulty_beatmap_sets: Vec<DifficultyBeatmapSet>,
}

/// Editor extension block of the index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoCustomData {
    #[serde(rename = "_contributors")]
    pub contributors: Vec<Contributor>,
    #[serde(rename = "_customEnvironment")]
    pub custom_environment: String,
    #[serde(rename = "_customEnvironmentHash")]
    pub custom_environment_hash: String,
}

/// A credited contributor, carried over from the legacy index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    /// What they did (e.g. "Lighting")
    #[serde(rename = "_role")]
    pub role: String,
    #[serde(rename = "_name")]
    pub name: String,
    /// Image file relative to the map directory
    #[serde(rename = "_iconPath")]
    pub icon_path: String,
}

/// All difficulties of one characteristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBeatmapSet {
    #[serde(rename = "_beatmapCharacteristicName")]
    pub characteristic: Characteristic,
    #[serde(rename = "_difficultyBeatmaps")]
    pub difficulty_beatmaps: Vec<DifficultyBeatmap>,
}

/// Index entry for one difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBeatmap {
    /// Difficulty name as written in the legacy index
    #[serde(rename = "_difficulty")]
    pub difficulty: String,
    /// Canonical rank for the name, `UNKNOWN_RANK` for unrecognised names
    #[serde(rename = "_difficultyRank")]
    pub difficulty_rank: i64,
    /// `.dat` file holding this difficulty, relative to the map directory
    #[serde(rename = "_beatmapFilename")]
    pub beatmap_filename: String,
    #[serde(rename = "_noteJumpMovementSpeed")]
    pub note_jump_movement_speed: f64,
    #[serde(rename = "_noteJumpStartBeatOffset")]
    pub note_jump_start_beat_offset: f64,
    #[serde(rename = "_customData")]
    pub custom_data: DifficultyCustomData,
}

/// Editor extension block of one difficulty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCustomData {
    #[serde(rename = "_difficultyLabel")]
    pub difficulty_label: String,
    #[serde(rename = "_editorOffset")]
    pub editor_offset: i64,
    #[serde(rename = "_editorOldOffset")]
    pub editor_old_offset: i64,
    #[serde(rename = "_warnings")]
    pub warnings: Vec<String>,
    #[serde(rename = "_information")]
    pub information: Vec<String>,
    #[serde(rename = "_suggestions")]
    pub suggestions: Vec<String>,
    #[serde(rename = "_requirements")]
    pub requirements: Vec<String>,
    #[serde(rename = "_colorLeft", skip_serializing_if = "Option::is_none", default)]
    pub color_left: Option<Color>,
    #[serde(rename = "_colorRight", skip_serializing_if = "Option::is_none", default)]
    pub color_right: Option<Color>,
}

impl NewInfo {
    /// Iterate every difficulty in set order, then rank order within a set
    pub fn beatmaps(&self) -> impl Iterator<Item = &DifficultyBeatmap> {
        self.difficulty_beatmap_sets
            .iter()
            .flat_map(|set| set.difficulty_beatmaps.iter())
    }

    /// Find the set for a characteristic
    pub fn set(&self, characteristic: &Characteristic) -> Option<&DifficultyBeatmapSet> {
        self.difficulty_beatmap_sets
            .iter()
            .find(|set| &set.characteristic == characteristic)
    }
}
