//! Unit tests for storage functionality

use super::*;
use tempfile::TempDir;

const KEY: &str = "astro-stats-storage";

fn exercise_backend<S: KeyValueStorage>(storage: &mut S) {
    assert!(storage.get_item(KEY).unwrap().is_none());

    storage.set_item(KEY, "{\"teams\":[]}").unwrap();
    assert_eq!(
        storage.get_item(KEY).unwrap().as_deref(),
        Some("{\"teams\":[]}")
    );

    storage.set_item(KEY, "{\"players\":[]}").unwrap();
    assert_eq!(
        storage.get_item(KEY).unwrap().as_deref(),
        Some("{\"players\":[]}")
    );

    storage.remove_item(KEY).unwrap();
    assert!(storage.get_item(KEY).unwrap().is_none());

    // Removing twice is fine
    storage.remove_item(KEY).unwrap();
}

#[test]
fn test_memory_storage() {
    let mut storage = MemoryStorage::new();
    exercise_backend(&mut storage);
    assert!(storage.is_empty());
}

#[test]
fn test_memory_storage_with_item() {
    let storage = MemoryStorage::with_item(KEY, "doc");
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("doc"));
}

#[test]
fn test_file_storage() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path().join("data"));
    exercise_backend(&mut storage);
}

#[test]
fn test_file_storage_layout() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path());

    storage.set_item(KEY, "doc").unwrap();
    let path = temp_dir.path().join("astro-stats-storage.json");
    assert!(path.exists());
    assert_eq!(std::fs::read_to_string(path).unwrap(), "doc");
}

#[test]
fn test_file_storage_rejects_path_like_keys() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path());

    for key in ["", "../escape", "a/b", ".hidden"] {
        match storage.set_item(key, "x") {
            Err(crate::error::RosterError::Storage { .. }) => (),
            other => panic!("Expected storage error for {:?}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_sqlite_storage_in_memory() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    exercise_backend(&mut storage);
}

#[test]
fn test_sqlite_storage_on_disk_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("astro-stats.db");

    {
        let mut storage = SqliteStorage::open(&db_path).unwrap();
        storage.set_item(KEY, "persisted").unwrap();
    }

    let storage = SqliteStorage::open(&db_path).unwrap();
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("persisted"));
}

#[test]
fn test_sqlite_updated_at() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    assert!(storage.updated_at(KEY).unwrap().is_none());

    storage.set_item(KEY, "x").unwrap();
    assert!(storage.updated_at(KEY).unwrap().unwrap() > 0);
}

#[test]
fn test_initialize_schema_is_idempotent() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.set_item(KEY, "kept").unwrap();
    storage.initialize_schema().unwrap();
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("kept"));
}

#[test]
fn test_boxed_storage_delegates() {
    let mut storage: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
    exercise_backend(&mut storage);
}

#[test]
fn test_player_height_accepts_empty_string_number_and_missing() {
    let json = r#"{
        "id": "p1", "firstName": "Leo", "lastName": "M", "dob": "2005-06-24",
        "sex": "Male", "height": "", "weight": 68, "teamId": "t1", "jumpData": []
    }"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.height, None);
    assert_eq!(player.weight, Some(68.0));

    let json = r#"{
        "id": "p2", "firstName": "Ana", "lastName": "R", "dob": "2006-01-02",
        "sex": "", "height": null, "teamId": "t1"
    }"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.height, None);
    assert_eq!(player.weight, None);
    assert_eq!(player.sex, crate::cli::types::Sex::Unset);
    assert!(player.jump_data.is_empty());
}

#[test]
fn test_player_serializes_missing_height_as_empty_string() {
    let player = Player {
        id: "p1".into(),
        first_name: "Leo".to_string(),
        last_name: "M".to_string(),
        dob: "2005-06-24".to_string(),
        sex: crate::cli::types::Sex::Male,
        height: None,
        weight: Some(68.5),
        team_id: "t1".into(),
        jump_data: vec![],
    };

    let value = serde_json::to_value(&player).unwrap();
    assert_eq!(value["height"], serde_json::json!(""));
    assert_eq!(value["weight"], serde_json::json!(68.5));
    assert_eq!(value["teamId"], serde_json::json!("t1"));
    assert_eq!(value["firstName"], serde_json::json!("Leo"));
    assert!(value["jumpData"].as_array().unwrap().is_empty());
}

#[test]
fn test_jump_data_reads_browser_timestamps() {
    let json = r#"{
        "id": "j1", "date": "2024-05-01T12:30:00.000Z", "flightTime": 0.45,
        "jumpHeight": 35.2, "repetitionIndex": 1, "contactTime": 0.22
    }"#;
    let jump: JumpTestData = serde_json::from_str(json).unwrap();
    assert_eq!(jump.date.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    assert_eq!(jump.repetition_index, 1.0);
}

#[test]
fn test_player_update_is_empty() {
    assert!(PlayerUpdate::default().is_empty());
    let update = PlayerUpdate {
        height: Some(Some(180.0)),
        ..Default::default()
    };
    assert!(!update.is_empty());
}
