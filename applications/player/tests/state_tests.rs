//! Application state wiring tests

use cadence_player::{search_results_json, AppError, AppState, PlayerConfig};
use std::time::Duration;

fn quiet_config() -> PlayerConfig {
    let mut config = PlayerConfig::default();
    config.sources.simulate_latency = false;
    config.playback.shuffle_seed = Some(11);
    config
}

#[test]
fn new_rejects_invalid_config() {
    let mut config = quiet_config();
    config.playback.volume = 2.0;
    assert!(matches!(AppState::new(config), Err(AppError::Config(_))));
}

#[test]
fn configured_source_becomes_active() {
    let mut config = quiet_config();
    config.sources.active_source = "youtube-music".to_string();

    let state = AppState::new(config).unwrap();
    assert_eq!(state.sources.active_id(), "youtube-music");
}

#[test]
fn transport_starts_from_config() {
    let mut config = quiet_config();
    config.playback.volume = 0.3;

    let state = AppState::new(config).unwrap();
    assert_eq!(state.playback.transport().volume(), 0.3);
    assert_eq!(state.playback.backend().volume(), 0.3);
}

#[tokio::test]
async fn playing_records_recently_played() {
    let mut state = AppState::new(quiet_config()).unwrap();
    let tracks: Vec<_> = state.library.tracks()[..3].to_vec();
    for track in &tracks {
        state.playback.add_to_queue(track.clone());
    }

    state.play_track(tracks[0].clone()).await;
    state.pump_backend_events().await;
    assert_eq!(state.playback.transport().duration(), tracks[0].duration);

    state.next().await;
    state.pump_backend_events().await;

    let recent: Vec<_> = state
        .library
        .recently_played()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(recent, vec![tracks[1].id.as_str(), tracks[0].id.as_str()]);
}

#[tokio::test]
async fn auto_advance_is_recorded() {
    let mut state = AppState::new(quiet_config()).unwrap();
    let tracks: Vec<_> = state.library.tracks()[..2].to_vec();
    for track in &tracks {
        state.playback.add_to_queue(track.clone());
    }

    state.play_track(tracks[0].clone()).await;
    state.pump_backend_events().await;
    state
        .playback
        .backend_mut()
        .advance(tracks[0].duration + Duration::from_secs(1));
    state.pump_backend_events().await;

    assert_eq!(
        state.playback.transport().current_track().map(|t| t.id.as_str()),
        Some(tracks[1].id.as_str())
    );
    assert_eq!(state.library.recently_played()[0].id, tracks[1].id);
}

#[tokio::test]
async fn search_single_and_all_sources() {
    let state = AppState::new(quiet_config()).unwrap();

    let one = state.search("blue", Some("local")).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].0, "local");

    let all = state.search("blue", None).await.unwrap();
    assert_eq!(all.len(), 4);

    let err = state.search("blue", Some("napster")).await.unwrap_err();
    assert!(matches!(err, AppError::UnknownSource(_)));
}

#[tokio::test]
async fn notifications_follow_track_changes() {
    let mut state = AppState::new(quiet_config()).unwrap();
    let tracks: Vec<_> = state.library.tracks()[..2].to_vec();
    for track in &tracks {
        state.playback.add_to_queue(track.clone());
    }

    state.play_track(tracks[0].clone()).await;
    state.next().await;

    assert_eq!(
        state.take_notifications(),
        vec![
            format!("Now playing: {} - {}", tracks[0].artist, tracks[0].title),
            format!("Now playing: {} - {}", tracks[1].artist, tracks[1].title),
        ]
    );
    // Drained
    assert!(state.take_notifications().is_empty());
}

#[tokio::test]
async fn notifications_can_be_disabled() {
    let mut config = quiet_config();
    config.interface.show_notifications = false;
    let mut state = AppState::new(config).unwrap();
    let track = state.library.tracks()[0].clone();

    state.play_track(track).await;

    assert!(state.take_notifications().is_empty());
    assert!(state.playback.drain_events().is_empty());
}

#[tokio::test]
async fn search_results_render_as_json() {
    let state = AppState::new(quiet_config()).unwrap();
    let results = state.search("blue", Some("local")).await.unwrap();

    let json = search_results_json(&results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["source"], "local");
    assert_eq!(
        value[0]["results"]["tracks"].as_array().map(Vec::len),
        Some(results[0].1.tracks.len())
    );
}
