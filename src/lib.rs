//! Headless core of an endless-runner mini-game.
//!
//! A host renderer (browser scene graph, wgpu, anything with a frame
//! callback) drives [`controller::FrameLoop::update`] once per frame with
//! delta time, viewport aspect ratio, and discrete dodge/pause events, and
//! renders the transforms it gets back. The core owns obstacle spawning,
//! the speed ramp, collision detection, and the smoothed follow camera;
//! it does no rendering and no presentation of its own.

pub mod config;
pub mod logging;

// MVC without the V: the host is the view.
pub mod controller;
pub mod model;

pub use config::{ConfigError, GameConfig};
pub use controller::{FrameInput, FrameLoop, FrameOutput, InputEvent, InputProcessor, InputState};
pub use model::{DodgeSide, GameOutcome, GameState};
