use crate::config::GameConfig;

/// Which side the player is dodging toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeSide {
    Left,
    Right,
}

impl DodgeSide {
    /// Sign on the lateral axis: left is negative, right positive.
    pub fn sign(self) -> f32 {
        match self {
            DodgeSide::Left => -1.0,
            DodgeSide::Right => 1.0,
        }
    }
}

/// Runner state: forward progress, lateral position, and whether the run
/// is still alive. Speed is derived from distance, never stored, so it
/// cannot drift from the ramp.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub distance_travelled: f32,
    pub lateral_offset: f32,
    /// Visual lean while a dodge is held; cleared on release.
    pub tilt: f32,
    pub alive: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            distance_travelled: 0.0,
            lateral_offset: 0.0,
            tilt: 0.0,
            alive: true,
        }
    }

    /// Capped linear ramp: base + min(max_boost, distance * accel).
    /// Monotone non-decreasing in distance, bounded by top_speed().
    pub fn speed(&self, config: &GameConfig) -> f32 {
        config.base_speed + (self.distance_travelled * config.accel_factor).min(config.max_boost)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
