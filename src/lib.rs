//! A 2D platformer player controller: an engine-agnostic movement state
//! machine in [`controller`], plus the Bevy and avian2d host that plays it.

pub mod camera;
pub mod combat;
pub mod controller;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod level;
pub mod movement;
pub mod score;
pub mod ui;
