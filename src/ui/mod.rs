//! UI domain: in-game HUD elements.

mod hud_score;

pub use hud_score::{ScoreAmountText, ScoreDisplayUI};

use bevy::prelude::*;

use crate::ui::hud_score::{spawn_score_display_ui, update_score_display};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_display_ui)
            .add_systems(Update, update_score_display);
    }
}
