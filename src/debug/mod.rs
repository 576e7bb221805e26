//! Debug tooling for tuning the controller (dev-tools feature).
//!
//! Features:
//! - F1 toggles a live overlay with the controller snapshot and contacts
//! - F3 logs the same data as JSON

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::{DebugDump, DebugState};
pub use ui::{DebugInfoOverlay, format_overlay};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_status_message).chain())
            .add_systems(Update, update_debug_info_overlay);
    }
}
