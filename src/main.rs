//! Brick Breakout entry point
//!
//! Headless demo driver: runs the simulation with a simple autopilot that
//! chases the ball, drains tick events, and keeps the persisted high
//! score. A rendering front-end drives the exact same loop with real
//! input intents.

use brick_breakout::config::GameConfig;
use brick_breakout::highscores::{HighScore, JsonScoreStore};
use brick_breakout::input::{Intent, IntentState};
use brick_breakout::sim::{PlayStateMachine, RoundState, TickEvent, tick};

fn main() {
    env_logger::init();
    log::info!("Brick Breakout (headless) starting...");

    let config = GameConfig::new();
    let mut state = RoundState::new(config);
    let mut machine = PlayStateMachine::new();
    let mut intents = IntentState::new();

    let mut store = JsonScoreStore::new("highscore.json");
    let mut high_score = HighScore::load(&store);
    log::info!("stored high score: {}", high_score.current());

    // Any key press starts play
    intents.push(Intent::StartOrResume);

    let mut bricks_destroyed = 0u64;
    let mut best_round = 0u64;
    for frame in 0..20_000u32 {
        // Autopilot: keep the paddle center under the ball
        let paddle_center = state.paddle.x + state.paddle.w / 2.0;
        if state.ball.pos.x < paddle_center - state.paddle.speed {
            intents.push(Intent::MoveLeft);
        } else if state.ball.pos.x > paddle_center + state.paddle.speed {
            intents.push(Intent::MoveRight);
        } else {
            intents.push(Intent::StopMoving);
        }

        let input = intents.sample();
        for event in tick(&mut state, &mut machine, &input) {
            match event {
                TickEvent::BrickDestroyed { row, col } => {
                    bricks_destroyed += 1;
                    log::debug!("frame {frame}: brick ({row}, {col}) down");
                }
                TickEvent::AllBricksCleared => {
                    log::info!("frame {frame}: field cleared, score {}", state.score);
                }
                TickEvent::RoundEnded { score } => {
                    log::info!("frame {frame}: round over at {score}");
                    best_round = best_round.max(score);
                    if high_score.submit(&mut store, score) {
                        println!("New high score: {score}!");
                    }
                    // Serve the next round right away
                    intents.push(Intent::StartOrResume);
                }
            }
        }
    }

    println!(
        "{bricks_destroyed} bricks destroyed, best round {best_round}, high score {}",
        high_score.current()
    );
}
