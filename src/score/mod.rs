//! Score domain: coins, the score resource and the sink it implements.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::CoinCollected;
pub use resources::{Coin, Score, ScoreSink};
pub use systems::credit_coins;

use bevy::prelude::*;

use crate::score::systems::{collect_coins, record_score};

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_message::<CoinCollected>()
            .add_systems(Update, (collect_coins, record_score).chain());
    }
}
