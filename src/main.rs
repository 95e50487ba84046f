use tracing::{info, warn};

use dasher::controller::{FrameInput, FrameLoop, InputEvent, InputState};
use dasher::model::{DodgeSide, GameState};
use dasher::{logging, GameConfig};

const DT: f32 = 1.0 / 60.0;
const ASPECT: f32 = 16.0 / 9.0;

/// Headless demo: runs a simple dodge bot at a fixed 60 Hz step until the
/// run ends, then reports the score. Pass a TOML config path to override
/// the default tuning.
fn main() {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => {
                info!(path = %path, "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path, error = %e, "falling back to default config");
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };

    let mut game = FrameLoop::new(config);
    let mut state = GameState::new();
    let mut input = InputState::new();
    let started = std::time::Instant::now();

    loop {
        steer(&game, &state, &mut input);
        let output = game.update(&mut state, &mut input, FrameInput { dt: DT, aspect: ASPECT });

        if state.frame % 600 == 0 {
            info!(
                frame = state.frame,
                distance = state.player.distance_travelled,
                obstacles = state.obstacles.len(),
            );
        }

        if let Some(outcome) = output.outcome {
            info!(
                score = outcome.score,
                frames = state.frame,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "game over"
            );
            break;
        }
    }
}

/// Dodge away from the nearest obstacle directly ahead, release otherwise.
fn steer(game: &FrameLoop, state: &GameState, input: &mut InputState) {
    let config = game.config();
    let player = &state.player;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.forward > player.distance_travelled)
        .filter(|o| (o.lateral - player.lateral_offset).abs() < config.obstacle_half_width + 2.0 * config.player_radius)
        .min_by(|a, b| a.forward.total_cmp(&b.forward));

    input.process_event(InputEvent::DodgeRelease(DodgeSide::Left));
    input.process_event(InputEvent::DodgeRelease(DodgeSide::Right));
    if let Some(obstacle) = threat {
        let side = if obstacle.lateral >= player.lateral_offset {
            DodgeSide::Left
        } else {
            DodgeSide::Right
        };
        input.process_event(InputEvent::DodgePress(side));
    }
}
