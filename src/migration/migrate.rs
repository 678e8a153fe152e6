//! Legacy-to-current beatmap migration
//!
//! Maps one legacy index plus its loaded difficulty files into a new index
//! and one new difficulty record per entry. No I/O happens here.

use super::conversions::{
    contributor_from_legacy, difficulty_beatmap_from_legacy, new_difficulty_from_legacy,
};
use super::legacy_types::{OldDifficulty, OldDifficultyLevel, OldInfo};
use crate::schema::{
    Characteristic, DifficultyBeatmap, DifficultyBeatmapSet, InfoCustomData, NewDifficulty,
    NewInfo, SCHEMA_VERSION,
};
use indexmap::IndexMap;

/// Index fields that the legacy format keeps per difficulty
///
/// The current format has a single slot for each of these, so the value
/// from the last difficulty processed wins. A tempo override only counts
/// when it is non-zero; otherwise the index tempo is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LastWins {
    pub beats_per_minute: Option<f64>,
    pub shuffle: f64,
    pub shuffle_period: f64,
    pub song_filename: String,
}

impl LastWins {
    /// Fold in one difficulty entry; call in index order
    pub fn observe(&mut self, level: &OldDifficultyLevel, difficulty: &OldDifficulty) {
        if difficulty.beats_per_minute != 0.0 {
            self.beats_per_minute = Some(difficulty.beats_per_minute);
        }
        self.shuffle = difficulty.shuffle;
        self.shuffle_period = difficulty.shuffle_period;
        self.song_filename = level.audio_path.clone();
    }

    fn apply(self, info: &mut NewInfo) {
        if let Some(bpm) = self.beats_per_minute {
            info.beats_per_minute = bpm;
        }
        info.shuffle = self.shuffle;
        info.shuffle_period = self.shuffle_period;
        info.song_filename = self.song_filename;
    }
}

/// A converted difficulty payload and the filename it is written under
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDifficulty {
    pub filename: String,
    pub data: NewDifficulty,
}

/// Result of migrating one map
#[derive(Debug, Clone, PartialEq)]
pub struct MigratedMap {
    pub info: NewInfo,
    /// Difficulty payloads in set order, then rank order within each set
    pub difficulties: Vec<ConvertedDifficulty>,
}

/// Build the new index fields that come straight from the legacy index
///
/// The legacy subtitle moves into the song author slot and the new subtitle
/// is left empty. Sets, shuffle and song file are filled in later.
fn info_header(info: &OldInfo) -> NewInfo {
    NewInfo {
        version: SCHEMA_VERSION.to_string(),
        song_name: info.song_name.clone(),
        song_sub_name: String::new(),
        song_author_name: info.song_sub_name.clone(),
        level_author_name: info.author_name.clone(),
        beats_per_minute: info.beats_per_minute,
        song_time_offset: 0.0,
        shuffle: 0.0,
        shuffle_period: 0.0,
        preview_start_time: info.preview_start_time,
        preview_duration: info.preview_duration,
        song_filename: String::new(),
        cover_image_filename: info.cover_image_path.clone(),
        environment_name: info.environment_name.clone(),
        custom_data: InfoCustomData {
            contributors: info.contributors.iter().map(contributor_from_legacy).collect(),
            custom_environment: info.custom_environment.clone(),
            custom_environment_hash: info.custom_environment_hash.clone(),
        },
        difficulty_beatmap_sets: Vec::new(),
    }
}

/// Migrate a legacy map
///
/// `difficulties[i]` must be the loaded data file of
/// `info.difficulty_levels[i]`.
pub fn migrate(info: &OldInfo, difficulties: &[OldDifficulty]) -> MigratedMap {
    debug_assert_eq!(info.difficulty_levels.len(), difficulties.len());

    let mut new_info = info_header(info);
    let mut last = LastWins::default();
    let mut sets: IndexMap<Characteristic, Vec<(DifficultyBeatmap, NewDifficulty)>> =
        IndexMap::new();

    for (level, difficulty) in info.difficulty_levels.iter().zip(difficulties) {
        let characteristic = Characteristic::normalize(info.one_saber, &level.characteristic);
        let beatmap = difficulty_beatmap_from_legacy(level, difficulty);
        let data = new_difficulty_from_legacy(difficulty.clone());
        last.observe(level, difficulty);

        sets.entry(characteristic).or_default().push((beatmap, data));
    }
    last.apply(&mut new_info);

    let mut converted = Vec::with_capacity(difficulties.len());
    for (characteristic, mut entries) in sets {
        // Stable: equal ranks keep their index order
        entries.sort_by_key(|(beatmap, _)| beatmap.difficulty_rank);

        let mut difficulty_beatmaps = Vec::with_capacity(entries.len());
        for (beatmap, data) in entries {
            converted.push(ConvertedDifficulty {
                filename: beatmap.beatmap_filename.clone(),
                data,
            });
            difficulty_beatmaps.push(beatmap);
        }
        new_info.difficulty_beatmap_sets.push(DifficultyBeatmapSet {
            characteristic,
            difficulty_beatmaps,
        });
    }

    MigratedMap {
        info: new_info,
        difficulties: converted,
    }
}
