//! End-to-end conversion tests for single map directories
mod common;

use beatmap_migrate::migration::MAPPING_EXTENSIONS;
use beatmap_migrate::{ConvertError, ConvertFlags, INFO_DAT, NewInfo, SCHEMA_VERSION, Status, convert};
use common::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_writes_new_layout_and_removes_sources() {
    let dir = legacy_map_dir();
    let result = convert(dir.path(), &ConvertFlags::default());

    assert_eq!(result.status(), Status::Converted, "{:?}", result.error);
    assert!(!result.old_hash.is_empty());
    assert_eq!(result.new_hash.len(), 64);
    assert!(result.failed_deletes.is_empty());
    assert_eq!(
        file_names(dir.path()),
        vec!["Expert.dat", "Hard.dat", "NoArrowsEasy.dat", "info.dat"]
    );

    let info: NewInfo = serde_json::from_slice(&fs::read(dir.path().join(INFO_DAT)).unwrap()).unwrap();
    assert_eq!(info.version, SCHEMA_VERSION);
    assert_eq!(info.song_name, "Test Song");
    assert_eq!(info.song_sub_name, "");
    assert_eq!(info.song_author_name, "Test Artist");
    assert_eq!(info.level_author_name, "Test Mapper");
    assert_eq!(info.song_filename, "song.ogg");
    assert_eq!(info.cover_image_filename, "cover.jpg");
    assert_eq!(info.shuffle_period, 0.5);
    assert_eq!(info.custom_data.contributors.len(), 1);

    let sets = &info.difficulty_beatmap_sets;
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].characteristic.as_str(), "Standard");
    assert_eq!(sets[1].characteristic.as_str(), "NoArrows");

    let ranks: Vec<i64> = sets[0].difficulty_beatmaps.iter().map(|b| b.difficulty_rank).collect();
    assert_eq!(ranks, vec![5, 7]);
    let hard = &sets[0].difficulty_beatmaps[0];
    assert_eq!(hard.beatmap_filename, "Hard.dat");
    assert_eq!(hard.custom_data.difficulty_label, "Harder");
    assert_eq!(hard.custom_data.editor_offset, 10);
    assert_eq!(hard.custom_data.editor_old_offset, 5);
}

#[test]
fn test_difficulty_output_is_compact_with_every_list() {
    let dir = legacy_map_dir();
    convert(dir.path(), &ConvertFlags::default());

    let raw = fs::read_to_string(dir.path().join("Expert.dat")).unwrap();
    assert!(!raw.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["_version"], SCHEMA_VERSION);
    for key in ["_BPMChanges", "_events", "_notes", "_obstacles", "_bookmarks"] {
        assert!(value[key].is_array(), "{} missing", key);
    }
    assert_eq!(value["_notes"][0]["_lineIndex"], 1);

    let info = read_json(&dir.path().join(INFO_DAT));
    let custom = &info["_difficultyBeatmapSets"][0]["_difficultyBeatmaps"][0]["_customData"];
    for key in ["_warnings", "_information", "_suggestions", "_requirements"] {
        assert_eq!(custom[key], json!([]), "{} not an empty list", key);
    }
}

#[test]
fn test_dry_run_changes_nothing_but_still_hashes() {
    let dir = legacy_map_dir();
    let before = file_names(dir.path());

    let flags = ConvertFlags {
        dry_run: true,
        ..Default::default()
    };
    let dry = convert(dir.path(), &flags);
    assert!(dry.is_ok());
    assert_eq!(file_names(dir.path()), before);
    assert_eq!(dry.new_hash.len(), 64);

    // The dry-run digest matches the digest of a real run on the same input
    let real = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(real.new_hash, dry.new_hash);
    assert_eq!(real.old_hash, dry.old_hash);
}

#[test]
fn test_keep_files_leaves_sources() {
    let dir = legacy_map_dir();
    let flags = ConvertFlags {
        keep_files: true,
        ..Default::default()
    };
    let result = convert(dir.path(), &flags);
    assert!(result.is_ok());
    let names = file_names(dir.path());
    assert!(names.contains(&"info.json".to_string()));
    assert!(names.contains(&"Expert.json".to_string()));
    assert!(names.contains(&"info.dat".to_string()));
}

#[test]
fn test_missing_index_is_skipped() {
    let dir = TempDir::new().unwrap();
    let result = convert(dir.path(), &ConvertFlags::default());

    assert_eq!(result.status(), Status::Skipped);
    assert!(matches!(result.error, Some(ConvertError::InfoNotFound { .. })));
    assert_eq!(result.old_hash, "");
    assert_eq!(result.new_hash, "");
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn test_missing_difficulty_aborts_without_output() {
    let dir = legacy_map_dir();
    fs::remove_file(dir.path().join("Hard.json")).unwrap();

    let result = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(result.status(), Status::MissingDifficulty);
    match &result.error {
        Some(ConvertError::DifficultyNotFound { reference, .. }) => assert_eq!(reference, "Hard.json"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        file_names(dir.path()),
        vec!["Expert.json", "NoArrowsEasy.json", "info.json"]
    );
}

#[test]
fn test_malformed_difficulty_aborts_without_output() {
    let dir = legacy_map_dir();
    fs::write(dir.path().join("Expert.json"), "{\"_notes\": [").unwrap();

    let result = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(result.status(), Status::Failed);
    assert!(matches!(result.error, Some(ConvertError::Malformed { .. })));
    assert!(!dir.path().join(INFO_DAT).exists());
}

#[test]
fn test_malformed_index_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("info.json"), "not json").unwrap();

    let result = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(result.status(), Status::Failed);
    assert!(dir.path().join("info.json").exists());
}

#[test]
fn test_accepts_direct_info_json_path_with_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend(serde_json::to_vec(&json!({"songName": "Bom", "difficultyLevels": []})).unwrap());
    fs::write(dir.path().join("info.json"), bytes).unwrap();

    let result = convert(dir.path().join("info.json"), &ConvertFlags::default());
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(result.dir, dir.path());

    let info = read_json(&dir.path().join(INFO_DAT));
    assert_eq!(info["_songName"], "Bom");
    assert_eq!(info["_difficultyBeatmapSets"], json!([]));
}

#[test]
fn test_one_saber_map_groups_everything_under_one_saber() {
    let dir = TempDir::new().unwrap();
    let mut info = legacy_info();
    info["oneSaber"] = json!(true);
    write_json(dir.path(), "info.json", &info);
    for name in ["Expert.json", "Hard.json", "NoArrowsEasy.json"] {
        write_json(dir.path(), name, &legacy_difficulty());
    }

    convert(dir.path(), &ConvertFlags::default());
    let out = read_json(&dir.path().join(INFO_DAT));
    let sets = out["_difficultyBeatmapSets"].as_array().unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0]["_beatmapCharacteristicName"], "OneSaber");
    assert_eq!(sets[0]["_difficultyBeatmaps"].as_array().unwrap().len(), 3);
}

#[test]
fn test_off_grid_difficulty_requires_mapping_extensions() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "info.json",
        &json!({
            "difficultyLevels": [
                {"difficulty": "Expert", "audioPath": "song.ogg", "jsonPath": "Expert.json"}
            ]
        }),
    );
    write_json(
        dir.path(),
        "Expert.json",
        &json!({
            "_notes": [{"_time": 1, "_lineIndex": 1500, "_lineLayer": 0, "_type": 0, "_cutDirection": 1}],
            "_requirements": null
        }),
    );

    convert(dir.path(), &ConvertFlags::default());
    let out = read_json(&dir.path().join(INFO_DAT));
    let requirements = &out["_difficultyBeatmapSets"][0]["_difficultyBeatmaps"][0]["_customData"]["_requirements"];
    assert_eq!(*requirements, json!([MAPPING_EXTENSIONS]));
}

#[test]
fn test_mistyped_index_fields_still_convert() {
    let dir = legacy_map_dir();
    let mut info = legacy_info();
    info["difficultyLevels"][0]["difficultyRank"] = json!("4");
    info["difficultyLevels"][1]["offset"] = json!(12.5);
    write_json(dir.path(), "info.json", &info);

    let result = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(result.status(), Status::Converted, "{:?}", result.error);

    let out = read_json(&dir.path().join(INFO_DAT));
    let beatmaps = &out["_difficultyBeatmapSets"][0]["_difficultyBeatmaps"];
    assert_eq!(beatmaps[0]["_difficulty"], "Hard");
    assert_eq!(beatmaps[0]["_customData"]["_editorOffset"], 0);
    assert_eq!(beatmaps[1]["_difficultyRank"], 7);
}

#[test]
fn test_element_numbers_keep_their_text() {
    let dir = legacy_map_dir();
    convert(dir.path(), &ConvertFlags::default());

    let raw = fs::read_to_string(dir.path().join("Expert.dat")).unwrap();
    assert!(raw.contains(r#""_events":[{"_time":0,"_type":1,"_value":3}]"#), "{}", raw);
    assert!(raw.contains(r#""_time":1.5,"_lineIndex":1"#), "{}", raw);
}

#[test]
fn test_difficulty_colours_copied_only_when_present() {
    let dir = legacy_map_dir();
    let mut expert = legacy_difficulty();
    expert["_colorLeft"] = json!({"r": 1, "g": 0.25, "b": 0});
    expert["_colorRight"] = json!({"r": 0, "g": 0.5, "b": 1});
    write_json(dir.path(), "Expert.json", &expert);

    let result = convert(dir.path(), &ConvertFlags::default());
    assert!(result.is_ok(), "{:?}", result.error);

    let out = read_json(&dir.path().join(INFO_DAT));
    let beatmaps = &out["_difficultyBeatmapSets"][0]["_difficultyBeatmaps"];
    let expert_custom = &beatmaps[1]["_customData"];
    assert_eq!(expert_custom["_colorLeft"], json!({"r": 1.0, "g": 0.25, "b": 0.0}));
    assert_eq!(expert_custom["_colorRight"], json!({"r": 0.0, "g": 0.5, "b": 1.0}));

    let hard_custom = beatmaps[0]["_customData"].as_object().unwrap();
    assert!(!hard_custom.contains_key("_colorLeft"));
    assert!(!hard_custom.contains_key("_colorRight"));
}

#[test]
fn test_custom_environment_reaches_index_custom_data() {
    let dir = legacy_map_dir();
    let mut info = legacy_info();
    info["customEnvironment"] = json!("Skybox");
    info["customEnvironmentHash"] = json!("abc123");
    write_json(dir.path(), "info.json", &info);

    convert(dir.path(), &ConvertFlags::default());
    let out = read_json(&dir.path().join(INFO_DAT));
    assert_eq!(out["_customData"]["_customEnvironment"], "Skybox");
    assert_eq!(out["_customData"]["_customEnvironmentHash"], "abc123");
    assert_eq!(out["_customData"]["_contributors"][0]["_iconPath"], "helper.png");
}

#[test]
fn test_failed_delete_is_reported_but_not_an_error() {
    let dir = legacy_map_dir();
    fs::create_dir(dir.path().join("sub")).unwrap();
    // A second entry names the same file through another path, so its
    // delete fails once the first entry has removed the file
    let mut info = legacy_info();
    info["difficultyLevels"]
        .as_array_mut()
        .unwrap()
        .push(json!({"difficulty": "Normal", "audioPath": "song.ogg", "jsonPath": "sub/../Hard.json"}));
    write_json(dir.path(), "info.json", &info);

    let result = convert(dir.path(), &ConvertFlags::default());
    assert_eq!(result.status(), Status::Converted);
    assert!(result.error.is_none());
    assert!(!result.old_hash.is_empty());
    assert_eq!(result.failed_deletes, vec![dir.path().join("sub/../Hard.json")]);
    assert!(!dir.path().join("Hard.json").exists());
    assert!(dir.path().join(INFO_DAT).exists());
}
