//! Movement domain: clip and facing feedback on the placeholder sprite.

use bevy::prelude::*;

use crate::controller::{AnimationClip, Facing};
use crate::movement::{Player, PlayerAnimation, PlayerController};

/// Placeholder art: every clip is a tint of the player rectangle.
pub fn clip_color(clip: AnimationClip) -> Color {
    match clip {
        AnimationClip::Idle => Color::srgb(0.9, 0.9, 0.9),
        AnimationClip::Walk => Color::srgb(0.8, 0.9, 1.0),
        AnimationClip::Run => Color::srgb(0.6, 0.8, 1.0),
        AnimationClip::Crouch => Color::srgb(0.7, 0.7, 0.8),
        AnimationClip::Jump => Color::srgb(1.0, 0.95, 0.6),
        AnimationClip::Fall => Color::srgb(0.95, 0.8, 0.5),
        AnimationClip::WallCling => Color::srgb(0.6, 1.0, 0.7),
        AnimationClip::Shoot => Color::srgb(1.0, 0.5, 0.5),
    }
}

pub(crate) fn play_requested_clips(
    mut query: Query<(&mut PlayerAnimation, &mut Sprite), With<Player>>,
) {
    for (mut animation, mut sprite) in &mut query {
        if animation.requested.is_empty() {
            continue;
        }
        for clip in animation.requested.drain(..) {
            debug!("Playing clip {:?}", clip);
        }
        if let Some(clip) = animation.clip {
            sprite.color = clip_color(clip);
        }
    }
}

pub(crate) fn flip_to_facing(mut query: Query<(&PlayerController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.machine.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
