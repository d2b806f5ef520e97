// SPDX-License-Identifier: MPL-2.0
use level_lens::config::{self, Config, DEFAULT_SERVER_URL};
use level_lens::level::{summary, table_rows, Level};
use tempfile::tempdir;

#[test]
fn test_server_url_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: default server
    let initial_config = Config { server_url: None };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.server_url(), DEFAULT_SERVER_URL);

    // 2. Change config to a custom server
    let custom_config = Config {
        server_url: Some("http://meko.example:8080".to_string()),
    };
    config::save_to_path(&custom_config, &temp_config_file_path)
        .expect("Failed to write custom config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load custom config from path");
    assert_eq!(loaded.server_url(), "http://meko.example:8080");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_decode_body_renders_sorted_annotated_rows() {
    // Blocks arrive unsorted and mix oriented and unoriented types.
    let body = r##"{
        "title": "Tower",
        "author": "blivens",
        "rawData": "AAAA",
        "serializedData": "BBBB",
        "data": [
            {"x": 1, "y": 2, "z": 0, "type": {"name": "Win", "value": "W"}},
            {"x": 0, "y": 0, "z": 1,
             "type": {"name": "StoneStair(05)", "value": "05",
                      "parent": {"name": "StoneStair", "value": "s"}}},
            {"x": 2, "y": 0, "z": 0, "type": {"name": "Stone", "value": "#"}}
        ]
    }"##;

    let mut level = Level::from_json(body).expect("body should parse");
    level.sort_blocks();
    let rows = table_rows(&level);

    // Sorted by (y, z, x): stone at y=0,z=0 first, stair at y=0,z=1,
    // win at y=2 last.
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Stone");
    assert_eq!(rows[1].name, "StoneStair(05)");
    assert_eq!(rows[2].name, "Win");

    // Oriented type splits base value and orientation.
    assert_eq!(rows[1].base_value, "s");
    assert_eq!(rows[1].orientation, "05");

    // Unoriented type keeps its value in column 5, column 6 empty.
    assert_eq!(rows[2].base_value, "W");
    assert_eq!(rows[2].orientation, "");
}

#[test]
fn test_debug_summary_truncates_payload_blobs() {
    let raw = "Q".repeat(400);
    let body = format!(
        r#"{{"title":"T","author":"A","rawData":"{}","serializedData":"S","data":[]}}"#,
        raw
    );

    let level = Level::from_json(&body).expect("body should parse");
    let summary = summary::summarize(&level);

    assert!(summary.contains(&format!("{}...", "Q".repeat(30))));
    assert!(!summary.contains(&"Q".repeat(31)));
}
