//! Movement domain: input resource sampled once per frame.

use bevy::prelude::*;

use crate::controller::InputSnapshot;

#[derive(Resource, Debug, Default)]
pub struct MovementInput(pub InputSnapshot);
