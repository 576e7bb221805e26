//! Movement domain: system modules for the controller host.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use animation::{flip_to_facing, play_requested_clips};
pub(crate) use collisions::{detect_ground, detect_walls};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_gravity, drive_controller};
