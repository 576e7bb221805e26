//! Debug domain: debug toggles and the dump payload.

use bevy::prelude::*;
use serde::Serialize;

use crate::controller::ControllerSnapshot;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
    /// Message to log-and-show temporarily, with seconds left
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Everything the overlay shows, in a form serde_json can write out.
#[derive(Debug, Clone, Serialize)]
pub struct DebugDump {
    pub controller: ControllerSnapshot,
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub grounded: bool,
    pub touching_wall: bool,
    pub score: u32,
}
