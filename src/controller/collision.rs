use crate::config::GameConfig;
use crate::model::{GameState, Obstacle};
use glam::Vec2;

/// Axis-aligned collision footprint: center plus half-extents on the
/// (lateral, forward) plane. Distinct from whatever mesh the host draws.
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Footprint {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self { center, half_extents }
    }

    /// Closed-interval AABB overlap on both axes.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        let diff = (self.center - other.center).abs();
        let combined = self.half_extents + other.half_extents;
        diff.x <= combined.x && diff.y <= combined.y
    }
}

/// The player's square footprint, centered at (lateral_offset, distance).
pub fn player_footprint(state: &GameState, config: &GameConfig) -> Footprint {
    Footprint::new(
        Vec2::new(state.player.lateral_offset, state.player.distance_travelled),
        Vec2::splat(config.player_radius),
    )
}

/// An obstacle's anisotropic footprint (wider laterally than deep).
pub fn obstacle_footprint(obstacle: &Obstacle, config: &GameConfig) -> Footprint {
    Footprint::new(
        Vec2::new(obstacle.lateral, obstacle.forward),
        Vec2::new(config.obstacle_half_width, config.obstacle_half_depth),
    )
}

/// Linear scan over the live obstacle list; returns the index of the first
/// obstacle overlapping the player. Obstacle count is bounded by the
/// spawn/despawn policy, so no spatial partitioning is needed.
pub fn find_collision(state: &GameState, config: &GameConfig) -> Option<usize> {
    let player = player_footprint(state, config);
    state
        .obstacles
        .iter()
        .position(|obstacle| player.overlaps(&obstacle_footprint(obstacle, config)))
}
