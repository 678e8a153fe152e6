//! Current beatmap format
//!
//! - `info`: the `info.dat` index with its characteristic-keyed sets
//! - `difficulty`: the per-difficulty `.dat` record
//! - `elements`: notes, obstacles, events, bookmarks and tempo changes
//! - `characteristic`: game-mode names and the difficulty rank table
//! - `lenient`: zero-value fallback for mistyped fields

mod characteristic;
mod difficulty;
mod elements;
mod info;
pub(crate) mod lenient;

pub use characteristic::{Characteristic, UNKNOWN_RANK, difficulty_rank};
pub use difficulty::NewDifficulty;
pub use elements::{Bookmark, BpmChange, Color, Event, Note, Obstacle};
pub use info::{
    Contributor, DifficultyBeatmap, DifficultyBeatmapSet, DifficultyCustomData, InfoCustomData,
    NewInfo, SCHEMA_VERSION,
};
