//! Migration from the legacy beatmap layout
//!
//! The legacy layout keeps one `info.json` index listing every difficulty
//! with a free-text characteristic, and one JSON data file per difficulty.
//! The current layout groups difficulties into characteristic-keyed sets
//! inside `info.dat`, and writes each difficulty as a compact `.dat` file.
//!
//! - `legacy_types`: the old records as read from disk
//! - `conversions`: field-by-field mapping of a single entry
//! - `normalize`: the Mapping Extensions requirement check
//! - `migrate`: set grouping, ranking and the last-wins index fields

mod conversions;
mod legacy_types;
mod migrate;
mod normalize;

pub use conversions::{
    beatmap_filename, contributor_from_legacy, difficulty_beatmap_from_legacy,
    new_difficulty_from_legacy, rank_for,
};
pub use legacy_types::{OldContributor, OldDifficulty, OldDifficultyLevel, OldInfo};
pub use migrate::{ConvertedDifficulty, LastWins, MigratedMap, migrate};
pub use normalize::{MAPPING_EXTENSIONS, add_requirement, needs_mapping_extensions};
