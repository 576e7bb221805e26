//! Movement domain: gravity and the per-frame controller tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{AnimationSink, Frame, PhysicsSensors};
use crate::movement::{ContactSensors, MovementInput, Player, PlayerAnimation, PlayerController};

/// Bridges ray-cast contacts and the rigid body to the controller.
struct BodySensors<'a> {
    contacts: &'a ContactSensors,
    velocity: Option<Mut<'a, LinearVelocity>>,
    inverse_mass: f32,
}

impl PhysicsSensors for BodySensors<'_> {
    fn is_grounded(&self) -> bool {
        self.contacts.grounded
    }

    fn is_touching_wall(&self) -> bool {
        self.contacts.touching_wall()
    }

    fn velocity(&self) -> Option<Vec2> {
        self.velocity.as_ref().map(|velocity| velocity.0)
    }

    fn set_velocity(&mut self, value: Vec2) {
        if let Some(velocity) = self.velocity.as_mut() {
            velocity.0 = value;
        }
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if let Some(velocity) = self.velocity.as_mut() {
            velocity.0 += impulse * self.inverse_mass;
        }
    }
}

/// Bodies run with `GravityScale(0.0)`; gravity is integrated here, before the
/// controller, so velocity writes made by the controller are final.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    mut query: Query<(&PlayerController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (controller, mut velocity) in &mut query {
        velocity.y -= controller.machine.context().tuning().gravity * dt;
    }
}

pub(crate) fn drive_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            &ContactSensors,
            &mut PlayerController,
            Option<&mut LinearVelocity>,
            Option<&mut PlayerAnimation>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (contacts, mut controller, velocity, mut animation) in &mut query {
        let inverse_mass = controller.machine.context().tuning().inverse_mass();
        let mut sensors = BodySensors {
            contacts,
            velocity,
            inverse_mass,
        };
        let animator = animation
            .as_deref_mut()
            .map(|animation| animation as &mut dyn AnimationSink);

        let mut frame = Frame::new(&input.0, &mut sensors, animator, now);
        controller.machine.tick(dt, &mut frame);
    }
}
