//! Controller domain: the engine-agnostic player movement state machine.
//!
//! The host refreshes contact sensors, builds a [`Frame`] and calls
//! [`PlayerStateMachine::tick`] once per simulation step. Everything here is
//! plain data; the Bevy wiring lives in `crate::movement`.

mod collaborators;
mod context;
mod machine;
mod states;
mod tuning;


pub use collaborators::{AnimationClip, AnimationSink, Frame, InputSnapshot, PhysicsSensors};
pub use context::{Cooldown, Facing, MovementContext};
pub use machine::{ControllerSnapshot, PlayerStateMachine};
pub use states::{JumpKind, StateId};
pub use tuning::{ControllerTuning, TUNING_PATH, TuningLoadError, load_tuning, parse_tuning};
