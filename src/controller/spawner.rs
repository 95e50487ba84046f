use crate::config::GameConfig;
use crate::model::{GameState, Obstacle, ObstacleTint};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Emits obstacles at the far edge of the visible field on a fixed time
/// interval, independent of host frame cadence. Seeded so a run is
/// reproducible.
pub struct ObstacleSpawner {
    rng: SmallRng,
    accumulator: f32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            accumulator: 0.0,
        }
    }

    /// Spawn obstacles due this frame. The lateral field recenters on the
    /// player so dodging sideways never outruns the obstacle stream. Must
    /// not be called while paused or after game over; dt of zero
    /// accumulates nothing.
    pub fn update(&mut self, state: &mut GameState, config: &GameConfig, aspect: f32, dt: f32) {
        self.accumulator += dt;
        while self.accumulator >= config.spawn_interval {
            self.accumulator -= config.spawn_interval;

            let half_field = config.half_field_width(aspect);
            let lateral = state.player.lateral_offset + self.rng.gen_range(-half_field..half_field);
            let forward = state.player.distance_travelled + config.field_depth;
            let tint = ObstacleTint::ALL[self.rng.gen_range(0..ObstacleTint::ALL.len())];

            trace!(lateral, forward, "spawning obstacle");
            state.obstacles.push(Obstacle::new(lateral, forward, tint));
        }
    }

    /// Drop obstacles the player has passed by more than the trailing
    /// margin, keeping the list bounded.
    pub fn cleanup(&self, state: &mut GameState, config: &GameConfig) {
        let cutoff = state.player.distance_travelled - config.trailing_margin;
        state.obstacles.retain(|o| o.forward >= cutoff);
    }

    /// Back to a fresh run without reseeding.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GameConfig {
        GameConfig {
            spawn_interval: 0.1,
            ..GameConfig::default()
        }
    }

    #[test]
    fn obstacles_spawn_at_the_far_edge() {
        let config = test_config();
        let mut state = GameState::new();
        state.player.distance_travelled = 42.0;
        let mut spawner = ObstacleSpawner::new(1);

        spawner.update(&mut state, &config, 4.0 / 3.0, 0.1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].forward, 42.0 + config.field_depth);
    }

    #[test]
    fn lateral_offsets_stay_inside_the_recentered_field() {
        let config = test_config();
        let mut state = GameState::new();
        state.player.lateral_offset = 7.0;
        let mut spawner = ObstacleSpawner::new(2);
        let aspect = 16.0 / 9.0;

        for _ in 0..200 {
            spawner.update(&mut state, &config, aspect, 0.1);
        }
        let half = config.half_field_width(aspect);
        for o in &state.obstacles {
            assert!((o.lateral - 7.0).abs() <= half);
        }
    }

    #[test]
    fn zero_dt_spawns_nothing() {
        let config = test_config();
        let mut state = GameState::new();
        let mut spawner = ObstacleSpawner::new(3);
        for _ in 0..100 {
            spawner.update(&mut state, &config, 1.0, 0.0);
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn spawn_count_matches_elapsed_intervals() {
        let config = test_config();
        let mut state = GameState::new();
        let mut spawner = ObstacleSpawner::new(4);
        // 1 second at 0.1s interval, fed as uneven frames
        for dt in [0.05, 0.25, 0.3, 0.1, 0.3] {
            spawner.update(&mut state, &config, 1.0, dt);
        }
        assert_eq!(state.obstacles.len(), 10);
    }

    #[test]
    fn cleanup_drops_passed_obstacles() {
        let config = test_config();
        let mut state = GameState::new();
        state.player.distance_travelled = 100.0;
        state.obstacles.push(Obstacle::new(0.0, 100.0 - config.trailing_margin - 0.1, ObstacleTint::Yellow));
        state.obstacles.push(Obstacle::new(0.0, 100.0 - config.trailing_margin, ObstacleTint::Orange));
        state.obstacles.push(Obstacle::new(0.0, 120.0, ObstacleTint::Violet));

        let spawner = ObstacleSpawner::new(5);
        spawner.cleanup(&mut state, &config);
        assert_eq!(state.obstacles.len(), 2);
        assert!(state
            .obstacles
            .iter()
            .all(|o| state.player.distance_travelled - o.forward <= config.trailing_margin));
    }

    #[test]
    fn same_seed_same_stream() {
        let config = test_config();
        let mut a = GameState::new();
        let mut b = GameState::new();
        let mut spawner_a = ObstacleSpawner::new(42);
        let mut spawner_b = ObstacleSpawner::new(42);
        for _ in 0..50 {
            spawner_a.update(&mut a, &config, 1.5, 0.1);
            spawner_b.update(&mut b, &config, 1.5, 0.1);
        }
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.lateral, ob.lateral);
            assert_eq!(oa.tint, ob.tint);
        }
    }
}
