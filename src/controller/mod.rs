// CONTROLLER: input, game logic, and the per-frame update loop
pub mod camera_controller;
pub mod collision;
pub mod frame_loop;
pub mod input;
pub mod spawner;

pub use camera_controller::CameraController;
pub use collision::{find_collision, Footprint};
pub use frame_loop::{FrameInput, FrameLoop, FrameOutput};
pub use input::{InputEvent, InputProcessor, InputState, KeyBindings};
pub use spawner::ObstacleSpawner;
