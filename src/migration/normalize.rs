//! Compatibility-flag normalization
//!
//! Placements outside the standard 4x3 grid only load with the Mapping
//! Extensions mod, so a converted difficulty that uses them must list the
//! mod in its requirements.

use super::legacy_types::OldDifficulty;
use crate::schema::{Note, Obstacle};
use serde_json::Number;
use std::ops::RangeInclusive;

/// Requirement string naming the grid extension mod
pub const MAPPING_EXTENSIONS: &str = "Mapping Extensions";

const LINE_INDICES: RangeInclusive<i64> = 0..=3;
const LINE_LAYERS: RangeInclusive<i64> = 0..=2;
/// Eight directions plus the dot note
const CUT_DIRECTIONS: RangeInclusive<i64> = 0..=8;
/// Full-height wall and crouch wall
const OBSTACLE_TYPES: RangeInclusive<i64> = 0..=1;
const GRID_WIDTH: i64 = 4;

/// Grid coordinate of an element key
///
/// A missing key sits at zero. Fractional or out-of-range numbers have no
/// grid coordinate and so count as off grid.
fn coordinate(value: &Option<Number>) -> Option<i64> {
    let Some(number) = value else {
        return Some(0);
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn within(range: &RangeInclusive<i64>, value: &Option<Number>) -> bool {
    coordinate(value).is_some_and(|v| range.contains(&v))
}

fn note_off_grid(note: &Note) -> bool {
    !within(&LINE_INDICES, &note.line_index)
        || !within(&LINE_LAYERS, &note.line_layer)
        || !within(&CUT_DIRECTIONS, &note.cut_direction)
}

fn obstacle_off_grid(obstacle: &Obstacle) -> bool {
    match (coordinate(&obstacle.line_index), coordinate(&obstacle.width)) {
        (Some(index), Some(width)) => {
            !LINE_INDICES.contains(&index)
                || !within(&OBSTACLE_TYPES, &obstacle.kind)
                || !(0..=GRID_WIDTH).contains(&width)
                || index + width > GRID_WIDTH
        }
        _ => true,
    }
}

/// Check whether a difficulty places anything outside the standard grid
pub fn needs_mapping_extensions(difficulty: &OldDifficulty) -> bool {
    difficulty.notes.iter().any(note_off_grid)
        || difficulty.obstacles.iter().any(obstacle_off_grid)
}

/// Append a requirement unless it is already listed
///
/// Returns `true` if the list changed.
pub fn add_requirement(requirements: &mut Vec<String>, requirement: &str) -> bool {
    if requirements.iter().any(|r| r == requirement) {
        return false;
    }
    requirements.push(requirement.to_string());
    true
}
