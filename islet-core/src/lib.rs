//! Render-free logic for the Islet scene.
//!
//! Everything in this crate is a pure function of a clock reading (plus
//! immutable configuration): the water surface model, the motion paths the
//! animated objects follow, the registry that ticks those motions, and the
//! top-down camera rig. The `islet` binary wires these into Bevy; tests
//! exercise them without a window.

pub mod animation;
pub mod camera;
pub mod water;

pub use animation::{AnimationId, AnimationRegistry, Motion};
pub use camera::{CameraMode, DollyStep, MoveFlags, TopDownRig};
pub use water::{WaveParameterError, WaveParameters};
