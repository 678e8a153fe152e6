//! Beatmap elements shared by the legacy and the current difficulty layout
//!
//! Both layouts store notes, obstacles, events, bookmarks and tempo changes
//! with the same keys, so they are modelled once. Known keys hold the
//! number exactly as it was written (`0` stays `0`, never `0.0`), and a key
//! missing from the source stays missing in the output. Keys an element
//! carries beyond the known ones (mod data such as `_customData`) are kept
//! verbatim in `extra` and written back unchanged.

use super::lenient::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A block or bomb
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(rename = "_time", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<Number>,
    #[serde(rename = "_lineIndex", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_index: Option<Number>,
    #[serde(rename = "_lineLayer", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_layer: Option<Number>,
    #[serde(rename = "_type", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Number>,
    #[serde(rename = "_cutDirection", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cut_direction: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A wall or ceiling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Obstacle {
    #[serde(rename = "_time", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<Number>,
    #[serde(rename = "_lineIndex", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_index: Option<Number>,
    #[serde(rename = "_type", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Number>,
    #[serde(rename = "_duration", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(rename = "_width", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A lighting or environment event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "_time", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<Number>,
    #[serde(rename = "_type", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Number>,
    #[serde(rename = "_value", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An editor bookmark
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bookmark {
    #[serde(rename = "_time", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<Number>,
    #[serde(rename = "_name", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tempo change inside a difficulty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BpmChange {
    #[serde(rename = "_BPM", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bpm: Option<Number>,
    #[serde(rename = "_time", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<Number>,
    #[serde(rename = "_beatsPerBar", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub beats_per_bar: Option<Number>,
    #[serde(rename = "_metronomeOffset", deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metronome_offset: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// RGB colour override, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    #[serde(deserialize_with = "lenient")]
    pub r: f64,
    #[serde(deserialize_with = "lenient")]
    pub g: f64,
    #[serde(deserialize_with = "lenient")]
    pub b: f64,
}
