//! Integration tests for command handlers

use std::path::PathBuf;

use astro_stats::{
    commands::{
        jumps::{handle_jump_add, handle_jump_chart},
        open_store, resolve_data_dir,
        players::{handle_player_add, handle_player_show},
        teams::{handle_team_add, handle_team_list},
    },
    storage::*,
    JumpMetric, Sex, StorageBackend, DATA_DIR_ENV_VAR,
};
use chrono::NaiveDate;
use tempfile::TempDir;

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_resolve_data_dir_from_option() {
    let dir = PathBuf::from("/tmp/roster");
    assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
}

#[test]
fn test_resolve_data_dir_from_env() {
    std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/astro-env");
    let result = resolve_data_dir(None);
    std::env::remove_var(DATA_DIR_ENV_VAR);

    assert_eq!(result.unwrap(), PathBuf::from("/tmp/astro-env"));
}

#[tokio::test]
async fn test_full_session_against_file_backend() {
    let dir = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let player_id = {
        let mut store = open_store(StorageBackend::File, Some(dir.path().to_path_buf()))
            .await
            .unwrap();
        let mut buf = Vec::<u8>::new();

        let team = handle_team_add(&mut store, "Rockets", &mut buf).unwrap();
        let player = handle_player_add(
            &mut store,
            PlayerInput {
                first_name: "Leo".to_string(),
                last_name: "M".to_string(),
                dob: "2005-06-24".to_string(),
                sex: Sex::Male,
                height: Some(170.0),
                weight: Some(68.0),
                team_id: team.id,
            },
            &mut buf,
        )
        .unwrap();
        handle_jump_add(
            &mut store,
            &player.id,
            JumpMeasurement {
                flight_time: 0.45,
                jump_height: 35.2,
                repetition_index: 1.0,
                contact_time: 0.22,
            },
            &mut buf,
        )
        .unwrap();

        let text = output(buf);
        assert!(text.contains("✓ Team 'Rockets' created"));
        assert!(text.contains("✓ Player Leo M added successfully"));
        assert!(text.contains("✓ Jump test recorded for player"));
        player.id
    };

    let store = open_store(StorageBackend::File, Some(dir.path().to_path_buf()))
        .await
        .unwrap();

    let mut buf = Vec::<u8>::new();
    handle_team_list(&store, false, &mut buf).unwrap();
    assert!(output(buf).contains("Rockets"));

    let mut buf = Vec::<u8>::new();
    handle_player_show(&store, &player_id, false, today, &mut buf).unwrap();
    let text = output(buf);
    assert!(text.contains("Team:          Rockets"));
    assert!(text.contains("(18 years)"));
    assert!(text.contains("Jump tests:    1"));

    let mut buf = Vec::<u8>::new();
    handle_jump_chart(
        &store,
        &player_id,
        Some(vec![JumpMetric::JumpHeight]),
        10,
        false,
        &mut buf,
    )
    .unwrap();
    let text = output(buf);
    assert!(text.contains("Jump Height"));
    assert!(text.contains("35.2"));
}

#[tokio::test]
async fn test_memory_backend_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = open_store(StorageBackend::Memory, Some(dir.path().to_path_buf()))
        .await
        .unwrap();
    assert!(store.is_ready());
    assert!(store.teams().unwrap().is_empty());
}
