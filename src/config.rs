use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// All gameplay tuning in one place. Distances are world units, durations
/// seconds, speeds units per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Forward speed at distance zero.
    pub base_speed: f32,
    /// Speed gained per unit of distance travelled.
    pub accel_factor: f32,
    /// Cap on the speed gained from the ramp; top speed is base_speed + max_boost.
    pub max_boost: f32,

    /// How far ahead of the player obstacles appear (the far visible edge).
    pub field_depth: f32,
    /// How far behind the player an obstacle may fall before despawn.
    pub trailing_margin: f32,
    /// Seconds between obstacle spawns.
    pub spawn_interval: f32,

    /// Half-extent of the player's square collision footprint.
    pub player_radius: f32,
    /// Obstacle footprint half-extents; wider laterally than deep.
    pub obstacle_half_width: f32,
    pub obstacle_half_depth: f32,

    /// Vertical placement of the player, cosmetic only.
    pub player_height: f32,
    /// Lean angle (radians) while a dodge is held.
    pub dodge_tilt: f32,

    /// Camera offset behind and above the player.
    pub camera_back: f32,
    pub camera_up: f32,
    /// Exponential smoothing factor in (0, 1); higher snaps faster.
    pub camera_blend: f32,

    /// Upper clamp on a single frame's delta time.
    pub max_frame_dt: f32,
    /// Seed for the obstacle spawner's RNG.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            accel_factor: 0.02,
            max_boost: 15.0,
            field_depth: 30.0,
            trailing_margin: 5.0,
            spawn_interval: 1.0 / 60.0,
            player_radius: 0.5,
            obstacle_half_width: 1.5,
            obstacle_half_depth: 1.0,
            player_height: -3.0,
            dodge_tilt: 0.3,
            camera_back: 5.0,
            camera_up: 2.0,
            camera_blend: 0.1,
            max_frame_dt: 0.1,
            rng_seed: 0x5eed,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Reject tunings the frame loop cannot run with. A non-positive
    /// field depth empties the spawn range, a non-positive spawn interval
    /// never drains the spawn accumulator, and a negative dt cap is not a
    /// valid clamp bound. NaN and infinities are rejected alongside.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.field_depth.is_finite() || self.field_depth <= 0.0 {
            return Err(ConfigError::Invalid("field_depth must be positive"));
        }
        if !self.spawn_interval.is_finite() || self.spawn_interval <= 0.0 {
            return Err(ConfigError::Invalid("spawn_interval must be positive"));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt < 0.0 {
            return Err(ConfigError::Invalid("max_frame_dt must not be negative"));
        }
        if !self.camera_blend.is_finite() || self.camera_blend <= 0.0 || self.camera_blend >= 1.0 {
            return Err(ConfigError::Invalid("camera_blend must be in (0, 1)"));
        }
        Ok(())
    }

    /// Top speed the ramp can reach.
    pub fn top_speed(&self) -> f32 {
        self.base_speed + self.max_boost
    }

    /// Half-width of the lateral spawn field for a given viewport aspect
    /// ratio. A wider viewport sees a narrower slice of the field at the
    /// far edge, so the field shrinks with aspect.
    pub fn half_field_width(&self, aspect: f32) -> f32 {
        self.field_depth / aspect.max(0.1)
    }
}
