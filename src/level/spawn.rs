//! Level domain: room geometry, training targets and coins.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::{Enemy, Health};
use crate::level::LevelConfig;
use crate::movement::{GameLayer, Ground, Wall};
use crate::score::Coin;

const COIN_SIZE: f32 = 12.0;
const ENEMY_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Deterministic coin positions for `config.seed`.
pub fn scatter_coins(config: &LevelConfig) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let (half_width, half_height) = config.coin_area;

    (0..config.coin_count)
        .map(|_| {
            let x = rng.random_range(-half_width..=half_width);
            // Keep coins off the floor slab
            let y = rng.random_range(-half_height * 0.8..=half_height);
            Vec2::new(x, y)
        })
        .collect()
}

enum Surface {
    Ground,
    Wall,
}

fn spawn_block(commands: &mut Commands, surface: Surface, size: Vec2, position: Vec2) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    let blocks = [GameLayer::Player, GameLayer::Enemy];
    let body = (
        Sprite {
            color: match surface {
                Surface::Ground => ground_color,
                Surface::Wall => wall_color,
            },
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    );

    match surface {
        Surface::Ground => {
            commands.spawn((Ground, body, CollisionLayers::new(GameLayer::Ground, blocks)));
        }
        Surface::Wall => {
            commands.spawn((Wall, body, CollisionLayers::new(GameLayer::Wall, blocks)));
        }
    }
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Floor and the two bounding walls
    spawn_block(&mut commands, Surface::Ground, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0));
    spawn_block(&mut commands, Surface::Wall, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0));
    spawn_block(&mut commands, Surface::Wall, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0));

    // Platforms, each higher than the last
    spawn_block(&mut commands, Surface::Ground, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0));
    spawn_block(&mut commands, Surface::Ground, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0));
    spawn_block(&mut commands, Surface::Ground, Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0));

    // Pillar for wall-cling practice
    spawn_block(&mut commands, Surface::Wall, Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0));

    info!("Spawned test room");
}

pub(crate) fn spawn_enemies(mut commands: Commands, config: Res<LevelConfig>) {
    for &(x, y) in &config.enemy_positions {
        commands.spawn((
            Enemy,
            Health::new(config.enemy_health),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::PlayerHitbox]),
        ));
    }
    info!("Spawned {} enemies", config.enemy_positions.len());
}

pub(crate) fn spawn_coins(mut commands: Commands, config: Res<LevelConfig>) {
    let positions = scatter_coins(&config);
    for position in &positions {
        commands.spawn((
            Coin {
                value: config.coin_value,
            },
            Sprite {
                color: Color::srgb(0.9, 0.75, 0.2),
                custom_size: Some(Vec2::splat(COIN_SIZE)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::circle(COIN_SIZE * 0.5),
            Sensor,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }
    info!(
        "Scattered {} coins (seed {})",
        positions.len(),
        config.seed
    );
}
