//! Score domain: pickup events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when the player touches a coin
#[derive(Debug)]
pub struct CoinCollected {
    pub coin: Entity,
    pub value: u32,
}

impl Message for CoinCollected {}
