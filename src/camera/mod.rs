//! Camera domain: a 2D camera that trails the player.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::movement::{PLAYER_SPAWN, Player, drive_controller};

#[derive(Component, Debug, Clone, Copy)]
pub struct CameraFollow {
    pub offset: Vec2,
    /// Higher values close the gap faster (per second).
    pub smoothing: f32,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 60.0),
            smoothing: 6.0,
        }
    }
}

/// Frame-rate independent step from `current` toward `target`.
pub fn follow_step(current: Vec2, target: Vec2, smoothing: f32, dt: f32) -> Vec2 {
    let t = 1.0 - (-smoothing * dt).exp();
    current.lerp(target, t.clamp(0.0, 1.0))
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.after(drive_controller));
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    let follow = CameraFollow::default();
    let start = PLAYER_SPAWN.truncate() + follow.offset;
    commands.spawn((Camera2d, follow, Transform::from_xyz(start.x, start.y, 0.0)));
    info!("Camera spawned at ({:.0}, {:.0})", start.x, start.y);
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut cameras: Query<(&CameraFollow, &mut Transform)>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let target = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (follow, mut transform) in &mut cameras {
        let next = follow_step(
            transform.translation.truncate(),
            target + follow.offset,
            follow.smoothing,
            dt,
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
