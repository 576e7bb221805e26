//! Score domain: the score sink and the coin pickup component.

use bevy::prelude::*;

/// Receives points for collected pickups.
pub trait ScoreSink {
    fn add_points(&mut self, points: u32);
    fn total(&self) -> u32;
}

#[derive(Resource, Debug, Default)]
pub struct Score {
    pub points: u32,
    pub pickups: u32,
}

impl ScoreSink for Score {
    fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
        self.pickups += 1;
    }

    fn total(&self) -> u32 {
        self.points
    }
}

/// A collectible worth `value` points.
#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub value: u32,
}
