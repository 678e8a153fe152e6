//! Field-level conversions from legacy records to the current layout
//!
//! These functions are pure; set grouping and the values that accumulate
//! across difficulties live in `migrate`.

use super::legacy_types::{OldContributor, OldDifficulty, OldDifficultyLevel};
use super::normalize::{MAPPING_EXTENSIONS, add_requirement, needs_mapping_extensions};
use crate::schema::{
    Contributor, DifficultyBeatmap, DifficultyCustomData, NewDifficulty, SCHEMA_VERSION,
    UNKNOWN_RANK, difficulty_rank,
};
use std::path::Path;

/// Copy a legacy contributor credit into the current layout
pub fn contributor_from_legacy(contributor: &OldContributor) -> Contributor {
    Contributor {
        role: contributor.role.clone(),
        name: contributor.name.clone(),
        icon_path: contributor.icon_path.clone(),
    }
}

/// Derive the `.dat` filename for a legacy difficulty data reference
///
/// `Expert.json` becomes `Expert.dat`; directories in the reference are kept.
pub fn beatmap_filename(json_path: &str) -> String {
    match json_path.strip_suffix(".json") {
        Some(stem) => format!("{}.dat", stem),
        None => Path::new(json_path)
            .with_extension("dat")
            .to_string_lossy()
            .into_owned(),
    }
}

/// Rank for a difficulty name, falling back to `UNKNOWN_RANK`
pub fn rank_for(difficulty: &str) -> i64 {
    difficulty_rank(difficulty).unwrap_or(UNKNOWN_RANK)
}

/// Build the index entry for one difficulty
pub fn difficulty_beatmap_from_legacy(
    level: &OldDifficultyLevel,
    difficulty: &OldDifficulty,
) -> DifficultyBeatmap {
    let mut requirements = difficulty.requirements.clone();
    if needs_mapping_extensions(difficulty) {
        add_requirement(&mut requirements, MAPPING_EXTENSIONS);
    }

    DifficultyBeatmap {
        difficulty: level.difficulty.clone(),
        difficulty_rank: rank_for(&level.difficulty),
        beatmap_filename: beatmap_filename(&level.json_path),
        note_jump_movement_speed: difficulty.note_jump_speed,
        note_jump_start_beat_offset: difficulty.note_jump_start_beat_offset,
        custom_data: DifficultyCustomData {
            difficulty_label: level.difficulty_label.clone(),
            editor_offset: level.offset,
            editor_old_offset: level.old_offset,
            warnings: difficulty.warnings.clone(),
            information: difficulty.information.clone(),
            suggestions: difficulty.suggestions.clone(),
            requirements,
            color_left: difficulty.color_left,
            color_right: difficulty.color_right,
        },
    }
}

/// Build the `.dat` payload for one difficulty
pub fn new_difficulty_from_legacy(difficulty: OldDifficulty) -> NewDifficulty {
    NewDifficulty {
        version: SCHEMA_VERSION.to_string(),
        bpm_changes: difficulty.bpm_changes,
        events: difficulty.events,
        notes: difficulty.notes,
        obstacles: difficulty.obstacles,
        bookmarks: difficulty.bookmarks,
    }
}
