use crate::model::{Obstacle, PlayerState};

/// Terminal result of a run, reported once when the player first collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOutcome {
    /// Final score: distance travelled at the moment of impact.
    pub score: f32,
}

/// Everything the updater owns for one session. The caller holds this and
/// passes it to the frame loop each frame; nothing here is global.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: PlayerState,
    pub obstacles: Vec<Obstacle>,
    pub paused: bool,
    pub outcome: Option<GameOutcome>,
    /// Frames processed so far, for diagnostics.
    pub frame: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: PlayerState::new(),
            obstacles: Vec::with_capacity(64),
            paused: false,
            outcome: None,
            frame: 0,
        }
    }

    /// Whether the updater should advance the world this frame.
    pub fn running(&self) -> bool {
        !self.paused && self.outcome.is_none()
    }

    /// Back to initial values. The host calls this when the player
    /// acknowledges the game-over affordance.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
