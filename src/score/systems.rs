//! Score domain: coin pickup and score bookkeeping.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::Player;
use crate::score::{Coin, CoinCollected, Score, ScoreSink};

pub(crate) fn collect_coins(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut coin_events: MessageWriter<CoinCollected>,
    players: Query<(), With<Player>>,
    coins: Query<&Coin>,
) {
    // A coin can start overlapping several player colliders in one step.
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (coin_entity, other) in pairs {
            if collected.contains(&coin_entity) || players.get(other).is_err() {
                continue;
            }
            let Ok(coin) = coins.get(coin_entity) else {
                continue;
            };

            collected.push(coin_entity);
            coin_events.write(CoinCollected {
                coin: coin_entity,
                value: coin.value,
            });
            commands.entity(coin_entity).despawn();
        }
    }
}

/// Credit every collected coin to `sink`; returns the points added.
pub fn credit_coins<'a>(
    sink: &mut impl ScoreSink,
    events: impl IntoIterator<Item = &'a CoinCollected>,
) -> u32 {
    let mut added = 0;
    for event in events {
        sink.add_points(event.value);
        added += event.value;
    }
    added
}

pub(crate) fn record_score(
    mut coin_events: MessageReader<CoinCollected>,
    mut score: ResMut<Score>,
) {
    if coin_events.is_empty() {
        return;
    }

    let added = credit_coins(&mut *score, coin_events.read());
    info!("Collected {} points. Total: {}", added, score.total());
}
