//! Debug domain: hotkeys and overlay refresh.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::{DebugDump, DebugState};
use crate::debug::ui::{DebugInfoOverlay, format_overlay, spawn_debug_info_overlay};
use crate::movement::{ContactSensors, Player, PlayerController};
use crate::score::{Score, ScoreSink};

type PlayerView<'a> = (
    &'a Transform,
    &'a PlayerController,
    &'a ContactSensors,
    Option<&'a LinearVelocity>,
);

fn collect_dump(player: PlayerView<'_>, score: &Score) -> DebugDump {
    let (transform, controller, sensors, velocity) = player;
    let velocity = velocity.map(|v| v.0).unwrap_or(Vec2::ZERO);
    DebugDump {
        controller: controller.machine.snapshot(),
        position: (transform.translation.x, transform.translation.y),
        velocity: (velocity.x, velocity.y),
        grounded: sensors.grounded,
        touching_wall: sensors.touching_wall(),
        score: score.total(),
    }
}

/// F1: toggle the overlay. F3: dump the controller as JSON to the log.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    score: Res<Score>,
    player_query: Query<PlayerView<'_>, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Debug Info ON"
        } else {
            "Debug Info OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        let Ok(player) = player_query.single() else {
            return;
        };
        match serde_json::to_string_pretty(&collect_dump(player, &score)) {
            Ok(json) => {
                info!("[DEBUG] Controller dump:\n{}", json);
                debug_state.set_message("Dumped controller state to log", 2.0);
            }
            Err(e) => warn!("[DEBUG] Failed to serialize controller dump: {}", e),
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    score: Res<Score>,
    player_query: Query<PlayerView<'_>, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok(player), Ok(mut text)) = (player_query.single(), overlay_query.single_mut()) {
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str());
        **text = format_overlay(&collect_dump(player, &score), status);
    }
}
