//! Debug domain: tests for the overlay text and JSON dump.

use super::{DebugDump, DebugState, format_overlay};
use crate::controller::{ControllerTuning, PlayerStateMachine};

fn sample_dump() -> DebugDump {
    DebugDump {
        controller: PlayerStateMachine::new(ControllerTuning::default()).snapshot(),
        position: (12.0, -4.0),
        velocity: (0.0, -30.0),
        grounded: true,
        touching_wall: false,
        score: 40,
    }
}

#[test]
fn test_overlay_lists_state_budget_and_score() {
    let text = format_overlay(&sample_dump(), None);
    assert!(text.contains("State: Idle"));
    assert!(text.contains("Jumps: 2/2"));
    assert!(text.contains("Score: 40"));
    assert!(!text.contains("> "));
}

#[test]
fn test_overlay_appends_status_line() {
    let text = format_overlay(&sample_dump(), Some("Debug Info ON"));
    assert!(text.ends_with("> Debug Info ON"));
}

#[test]
fn test_dump_serializes_to_json() {
    let json = serde_json::to_value(sample_dump()).unwrap();
    assert_eq!(json["controller"]["state"], "Idle");
    assert_eq!(json["controller"]["jumps_remaining"], 2);
    assert_eq!(json["controller"]["last_jump"], serde_json::Value::Null);
    assert_eq!(json["score"], 40);
    assert_eq!(json["grounded"], true);
}

#[test]
fn test_status_message_replaces_previous() {
    let mut state = DebugState::default();
    state.set_message("first", 1.0);
    state.set_message("second", 2.0);
    assert_eq!(state.status_message, Some(("second".to_string(), 2.0)));
}
