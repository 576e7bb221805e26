//! Level domain: the demo room, its enemies and its coin scatter.

mod config;
mod spawn;


pub use config::{
    LEVEL_PATH, LevelConfig, LevelLoadError, load_level_config, parse_level_config,
};
pub use spawn::scatter_coins;

use bevy::prelude::*;

use crate::level::config::load_level_config_system;
use crate::level::spawn::{spawn_coins, spawn_enemies, spawn_test_room};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelConfig>().add_systems(
            Startup,
            (
                load_level_config_system,
                (spawn_test_room, spawn_enemies, spawn_coins),
            )
                .chain(),
        );
    }
}
