//! Level domain: coin scatter and enemy placement settings.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};

pub const LEVEL_PATH: &str = "assets/data/level.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Seed for the coin scatter; the same seed lays out the same coins.
    pub seed: u64,
    pub coin_count: usize,
    pub coin_value: u32,
    /// Half extents (x, y) of the area coins may appear in, centred on the room.
    pub coin_area: (f32, f32),
    /// Enemy centres as (x, y).
    pub enemy_positions: Vec<(f32, f32)>,
    pub enemy_health: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            coin_count: 12,
            coin_value: 10,
            coin_area: (360.0, 180.0),
            enemy_positions: vec![(-250.0, -156.0), (250.0, -156.0)],
            enemy_health: 3.0,
        }
    }
}

impl LevelConfig {
    /// Collect human-readable problems; an empty list means the level can be built.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let (half_width, half_height) = self.coin_area;
        for (name, value) in [("coin_area.0", half_width), ("coin_area.1", half_height)] {
            if !value.is_finite() || value < 0.0 {
                issues.push(format!("{} must be a finite, non-negative number (got {})", name, value));
            }
        }

        if !self.enemy_health.is_finite() || self.enemy_health <= 0.0 {
            issues.push(format!("enemy_health must be positive (got {})", self.enemy_health));
        }

        for (index, (x, y)) in self.enemy_positions.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                issues.push(format!("enemy_positions[{}] must be finite (got ({}, {}))", index, x, y));
            }
        }

        issues
    }
}

/// Error type for level config loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Parse and validate level RON. `file` only labels errors.
pub fn parse_level_config(contents: &str, file: &str) -> Result<LevelConfig, LevelLoadError> {
    let config: LevelConfig = Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(contents)
        .map_err(|e| LevelLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let issues = config.validate();
    if !issues.is_empty() {
        return Err(LevelLoadError {
            file: file.to_string(),
            message: format!("Invalid level: {}", issues.join("; ")),
        });
    }

    Ok(config)
}

pub fn load_level_config(path: &Path) -> Result<LevelConfig, LevelLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_level_config(&contents, &file_name)
}

pub(crate) fn load_level_config_system(mut config: ResMut<LevelConfig>) {
    match load_level_config(Path::new(LEVEL_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded level config: seed={}, coins={}, enemies={}",
                loaded.seed,
                loaded.coin_count,
                loaded.enemy_positions.len()
            );
            *config = loaded;
        }
        Err(e) => warn!("{}; using default level config", e),
    }
}
