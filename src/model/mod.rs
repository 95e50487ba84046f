// MODEL: game entities and session state
pub mod camera;
pub mod game_state;
pub mod obstacle;
pub mod player;

pub use camera::Camera;
pub use game_state::{GameOutcome, GameState};
pub use obstacle::{Obstacle, ObstacleTint};
pub use player::{DodgeSide, PlayerState};
