use avian2d::prelude::*;
use bevy::prelude::*;

use ninja_controller::{camera, combat, level, movement, score, ui};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ninja Controller".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        camera::CameraPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        score::ScorePlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(ninja_controller::debug::DebugPlugin);

    app.run();
}
