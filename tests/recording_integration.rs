//! Integration tests for recordings and configuration files
//!
//! Tests JSON-lines load/save, replay determinism, and config validation

use std::io::Write;

use pretty_assertions::assert_eq;
use webshooter::core::{demo_session, load_recording, save_recording, FrameOrchestrator, PoseBuilder};
use webshooter::types::{CueEvent, GestureConfig, HandSide, HandsFrame};
use webshooter::GestureError;

fn replay(frames: &[HandsFrame]) -> Vec<CueEvent> {
    let mut orch = FrameOrchestrator::default();
    frames
        .iter()
        .flat_map(|f| orch.tick_at(f, f.time).events)
        .collect()
}

#[test]
fn test_saved_demo_replays_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.jsonl");
    let frames = demo_session();

    save_recording(&path, &frames).unwrap();
    let loaded = load_recording(&path).unwrap();

    assert_eq!(loaded.len(), frames.len());
    assert_eq!(replay(&loaded), replay(&frames));
}

#[test]
fn test_hand_written_recording() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let spider = serde_json::to_string(&HandsFrame::new(0.5).with_hand(HandSide::Left, PoseBuilder::spider().build())).unwrap();
    writeln!(file, "{{\"time\": 0.0}}").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "{}", spider).unwrap();

    let frames = load_recording(file.path()).unwrap();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].left.is_none());
    assert!(frames[1].left.is_some());
}

#[test]
fn test_malformed_line_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"time\": 0.0}}").unwrap();
    writeln!(file, "{{\"time\": 0.1}}").unwrap();
    writeln!(file, "not json").unwrap();

    let err = load_recording(file.path()).unwrap_err();
    match err {
        GestureError::Json { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_partial_config_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"throw_speed_threshold": 2.0, "show_joint_visuals": true}}"#).unwrap();

    let config = GestureConfig::load(file.path()).unwrap();
    assert_eq!(config.throw_speed_threshold, 2.0);
    assert!(config.show_joint_visuals);
    assert_eq!(config.extend_threshold, GestureConfig::default().extend_threshold);
    assert_eq!(config.throw_window, 5);
}

#[test]
fn test_inverted_dead_zone_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"curl_threshold": 1.3}}"#).unwrap();

    let err = GestureConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, GestureError::InvalidConfig(_)), "{}", err);
}

#[test]
fn test_default_config_is_valid() {
    assert!(GestureConfig::default().validate().is_ok());
}
