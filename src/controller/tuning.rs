//! Controller core: data-driven tuning and its RON loader.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/controller_tuning.ron";

/// Every constant the state machine reads. Missing fields in a RON file fall
/// back to the values in [`Default`].
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerTuning {
    /// Horizontal speed while walking or steering in the air.
    pub move_speed: f32,
    pub run_multiplier: f32,
    pub crouch_multiplier: f32,
    /// Fraction of horizontal velocity kept when dropping into a crouch.
    pub crouch_damping: f32,
    /// Jump budget restored on landing.
    pub max_jumps: u8,
    pub jump_impulse: f32,
    pub wall_jump_horizontal: f32,
    /// Time after a wall jump during which input does not steer.
    pub wall_jump_lock_time: f32,
    pub jump_cooldown: f32,
    pub coyote_time: f32,
    pub wall_slide_speed: f32,
    pub wall_cling_cooldown: f32,
    pub shoot_duration: f32,
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    pub body_mass: f32,
    pub gravity: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            run_multiplier: 1.6,
            crouch_multiplier: 0.4,
            crouch_damping: 0.5,
            max_jumps: 2,
            jump_impulse: 680.0,
            wall_jump_horizontal: 400.0,
            wall_jump_lock_time: 0.15,
            jump_cooldown: 0.2,
            coyote_time: 0.10,
            wall_slide_speed: 100.0,
            wall_cling_cooldown: 0.2,
            shoot_duration: 0.5,
            attack_cooldown: 0.5,
            attack_damage: 1.0,
            body_mass: 1.0,
            gravity: 1800.0,
        }
    }
}

impl ControllerTuning {
    pub fn run_speed(&self) -> f32 {
        self.move_speed * self.run_multiplier
    }

    pub fn crouch_speed(&self) -> f32 {
        self.move_speed * self.crouch_multiplier
    }

    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.body_mass
    }

    /// Height of a single jump from rest: h = v² / (2g), with v = impulse / mass.
    pub fn single_jump_height(&self) -> f32 {
        let v = self.jump_impulse * self.inverse_mass();
        v * v / (2.0 * self.gravity)
    }

    /// Collect human-readable problems; an empty list means the tuning is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let non_negative = [
            ("move_speed", self.move_speed),
            ("run_multiplier", self.run_multiplier),
            ("crouch_multiplier", self.crouch_multiplier),
            ("jump_impulse", self.jump_impulse),
            ("wall_jump_horizontal", self.wall_jump_horizontal),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
            ("jump_cooldown", self.jump_cooldown),
            ("coyote_time", self.coyote_time),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_cling_cooldown", self.wall_cling_cooldown),
            ("shoot_duration", self.shoot_duration),
            ("attack_cooldown", self.attack_cooldown),
            ("attack_damage", self.attack_damage),
            ("gravity", self.gravity),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                issues.push(format!("{} must be a finite, non-negative number (got {})", name, value));
            }
        }

        if !(0.0..=1.0).contains(&self.crouch_damping) {
            issues.push(format!(
                "crouch_damping must be within 0..=1 (got {})",
                self.crouch_damping
            ));
        }
        if !self.body_mass.is_finite() || self.body_mass <= 0.0 {
            issues.push(format!("body_mass must be positive (got {})", self.body_mass));
        }
        if self.max_jumps == 0 {
            issues.push("max_jumps must be at least 1".to_string());
        }

        issues
    }
}

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `file` only labels errors.
pub fn parse_tuning(contents: &str, file: &str) -> Result<ControllerTuning, TuningLoadError> {
    let tuning: ControllerTuning =
        ron_options()
            .from_str(contents)
            .map_err(|e| TuningLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

    let issues = tuning.validate();
    if !issues.is_empty() {
        return Err(TuningLoadError {
            file: file.to_string(),
            message: format!("Invalid tuning: {}", issues.join("; ")),
        });
    }

    Ok(tuning)
}

pub fn load_tuning(path: &Path) -> Result<ControllerTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}
