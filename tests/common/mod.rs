//! Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A legacy index with two Standard difficulties and one No Arrows difficulty
pub fn legacy_info() -> Value {
    json!({
        "songName": "Test Song",
        "songSubName": "Test Artist",
        "authorName": "Test Mapper",
        "contributors": [
            {"role": "Lighting", "name": "Helper", "iconPath": "helper.png"}
        ],
        "beatsPerMinute": 128,
        "previewStartTime": 12.0,
        "previewDuration": 10.0,
        "coverImagePath": "cover.jpg",
        "environmentName": "NiceEnvironment",
        "difficultyLevels": [
            {
                "difficulty": "Expert",
                "difficultyRank": 4,
                "audioPath": "song.ogg",
                "jsonPath": "Expert.json",
                "offset": 0,
                "oldOffset": 0
            },
            {
                "difficulty": "Hard",
                "difficultyRank": 3,
                "audioPath": "song.ogg",
                "jsonPath": "Hard.json",
                "offset": 10,
                "oldOffset": 5,
                "difficultyLabel": "Harder"
            },
            {
                "difficulty": "Easy",
                "difficultyRank": 1,
                "audioPath": "song.ogg",
                "jsonPath": "NoArrowsEasy.json",
                "characteristic": "No Arrows"
            }
        ]
    })
}

/// A legacy difficulty file with one note on the standard grid
pub fn legacy_difficulty() -> Value {
    json!({
        "_version": "1.5.0",
        "_beatsPerMinute": 128,
        "_beatsPerBar": 16,
        "_shuffle": 0,
        "_shufflePeriod": 0.5,
        "_noteJumpSpeed": 10,
        "_noteJumpStartBeatOffset": 0,
        "_events": [{"_time": 0, "_type": 1, "_value": 3}],
        "_notes": [{"_time": 1.5, "_lineIndex": 1, "_lineLayer": 0, "_type": 0, "_cutDirection": 1}],
        "_obstacles": []
    })
}

/// Write a JSON value to `dir/name`
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Create a temporary map directory with the default legacy fixtures
pub fn legacy_map_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "info.json", &legacy_info());
    for name in ["Expert.json", "Hard.json", "NoArrowsEasy.json"] {
        write_json(dir.path(), name, &legacy_difficulty());
    }
    dir
}

/// Sorted file names in a directory
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Read and parse a JSON file
pub fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}
