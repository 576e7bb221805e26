//! Combat domain: components for damageable targets and the player's attack.

use bevy::prelude::*;

use crate::controller::Cooldown;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Cooldown-gated damage window carried by the player's attack sensor.
///
/// While the window is open, every overlap that starts with an enemy deals
/// `damage` once.
#[derive(Component, Debug)]
pub struct AttackTrigger {
    pub damage: f32,
    cooldown: Cooldown,
    attacking: bool,
}

impl AttackTrigger {
    pub fn new(damage: f32, cooldown: f32) -> Self {
        Self {
            damage,
            cooldown: Cooldown::new(cooldown),
            attacking: false,
        }
    }

    /// Open the window unless the previous attack is still cooling down.
    pub fn start_attack(&mut self, now: f32) -> bool {
        if !self.cooldown.ready(now) {
            return false;
        }
        self.cooldown.stamp(now);
        self.attacking = true;
        true
    }

    pub fn stop_attack(&mut self) {
        self.attacking = false;
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Damage owed to a target whose overlap just started.
    pub fn on_overlap(&self) -> Option<f32> {
        self.attacking.then_some(self.damage)
    }
}

/// Links an attack sensor to the character whose Shoot state drives it.
#[derive(Component, Debug)]
pub struct AttackSensor {
    pub owner: Entity,
    /// Whether the owner was in Shoot last frame.
    pub was_shooting: bool,
}

impl AttackSensor {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            was_shooting: false,
        }
    }
}
