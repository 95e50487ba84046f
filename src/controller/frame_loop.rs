use crate::config::GameConfig;
use crate::controller::camera_controller::CameraController;
use crate::controller::collision;
use crate::controller::input::InputState;
use crate::controller::spawner::ObstacleSpawner;
use crate::model::{Camera, GameOutcome, GameState};
use glam::{Mat4, Vec3};
use tracing::{debug, info};

/// Per-frame facts the host supplies.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since the previous frame. Negative values are clamped to
    /// zero, large stalls to the configured cap.
    pub dt: f32,
    /// Viewport aspect ratio; sizes the lateral spawn field.
    pub aspect: f32,
}

/// Everything the host needs to render one frame.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub player_transform: Mat4,
    pub obstacle_transforms: Vec<Mat4>,
    /// Smoothed world-to-camera transform.
    pub camera_view: Mat4,
    pub camera_view_proj: Mat4,
    /// Set from the frame the run ends onward; the host presents the
    /// restart affordance and calls [`FrameLoop::reset`] on acknowledgement.
    pub outcome: Option<GameOutcome>,
}

/// The game-state updater: one synchronous call per rendered frame.
/// Owns the helpers (spawner, camera) but not the [`GameState`], which the
/// caller passes in by reference so sessions stay explicit and testable.
pub struct FrameLoop {
    config: GameConfig,
    spawner: ObstacleSpawner,
    camera_controller: CameraController,
    pub camera: Camera,
}

impl FrameLoop {
    pub fn new(config: GameConfig) -> Self {
        let spawner = ObstacleSpawner::new(config.rng_seed);
        let camera_controller = CameraController::new(&config);
        let camera = Camera::new(1.0);
        Self {
            config,
            spawner,
            camera_controller,
            camera,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance the world by one frame. Order: pause toggle, integration,
    /// collision, spawn, cleanup, camera. A collision ends the run
    /// immediately and skips the rest of the world update for that frame.
    pub fn update(&mut self, state: &mut GameState, input: &mut InputState, frame: FrameInput) -> FrameOutput {
        let dt = frame.dt.clamp(0.0, self.config.max_frame_dt);
        state.frame += 1;
        self.camera.set_aspect(frame.aspect);

        if input.consume_pause_request() && state.outcome.is_none() {
            state.paused = !state.paused;
            debug!(paused = state.paused, "pause toggled");
        }

        if state.running() {
            self.advance_world(state, input, frame.aspect, dt);
        }

        self.render_output(state)
    }

    fn advance_world(&mut self, state: &mut GameState, input: &InputState, aspect: f32, dt: f32) {
        let speed = state.player.speed(&self.config);

        // Dodge input: lateral velocity scales with forward speed, and the
        // lean follows the held side. Release clears both.
        match input.active_dodge() {
            Some(side) => {
                state.player.lateral_offset += side.sign() * speed * dt;
                state.player.tilt = side.sign() * self.config.dodge_tilt;
            }
            None => state.player.tilt = 0.0,
        }
        state.player.distance_travelled += speed * dt;

        if let Some(index) = collision::find_collision(state, &self.config) {
            let score = state.player.distance_travelled;
            state.player.alive = false;
            state.outcome = Some(GameOutcome { score });
            info!(score, obstacle = index, "collision: game over");
            // No spawning or cleanup after the terminal frame's impact
            return;
        }

        self.spawner.update(state, &self.config, aspect, dt);
        self.spawner.cleanup(state, &self.config);
    }

    fn render_output(&mut self, state: &GameState) -> FrameOutput {
        let player_transform = self.player_transform(state);
        self.camera_controller.follow(&mut self.camera, player_transform);

        let obstacle_transforms = state
            .obstacles
            .iter()
            .map(|o| Mat4::from_translation(Vec3::new(o.lateral, self.config.player_height, -o.forward)))
            .collect();

        FrameOutput {
            player_transform,
            obstacle_transforms,
            camera_view: self.camera.view,
            camera_view_proj: self.camera.view_proj(),
            outcome: state.outcome,
        }
    }

    /// The forward scalar maps to world -Z, lateral to world X; the dodge
    /// lean is a roll about the travel axis.
    fn player_transform(&self, state: &GameState) -> Mat4 {
        Mat4::from_translation(Vec3::new(
            state.player.lateral_offset,
            self.config.player_height,
            -state.player.distance_travelled,
        )) * Mat4::from_rotation_z(state.player.tilt)
    }

    /// Start a new session: fresh state, spawn timing rewound. The RNG
    /// keeps its stream so consecutive runs differ.
    pub fn reset(&mut self, state: &mut GameState) {
        state.reset();
        self.spawner.reset();
    }
}
