//! Debug domain: the info overlay.

use bevy::prelude::*;

use crate::debug::DebugDump;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub fn format_overlay(dump: &DebugDump, status: Option<&str>) -> String {
    let controller = &dump.controller;
    let mut text = format!(
        "State: {:?}\nJumps: {}/{}\nFacing: {:?}\nGrounded: {}  Wall: {}\nCoyote: {}  Clinging: {}\nLast jump: {:?}\nPos: ({:.0}, {:.0})  Vel: ({:.0}, {:.0})\nScore: {}",
        controller.state,
        controller.jumps_remaining,
        controller.max_jumps,
        controller.facing,
        dump.grounded,
        dump.touching_wall,
        controller.coyote_grace,
        controller.clinging,
        controller.last_jump,
        dump.position.0,
        dump.position.1,
        dump.velocity.0,
        dump.velocity.1,
        dump.score,
    );
    if let Some(status) = status {
        text.push_str("\n> ");
        text.push_str(status);
    }
    text
}

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
