//! Simulation tick
//!
//! One tick per rendered frame: apply control intents, move the paddle and
//! ball if the machine is running, resolve collisions, update the score,
//! and report what happened as events. All inputs are pre-validated
//! numeric state; nothing in here can fail.
//!
//! Collision resolution runs on every tick whether or not the machine is
//! running - only motion is gated, so a paused ball overlapping a wall
//! keeps flipping its velocity sign. Pause freezes motion, not collision
//! resolution.

use serde::{Deserialize, Serialize};

use super::collision;
use super::fsm::PlayStateMachine;
use super::state::RoundState;

/// Paddle steering sampled for this tick; last write wins between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub steer: Steer,
    pub start_or_resume: bool,
    pub pause: bool,
    pub stop: bool,
}

/// What the simulation reported this tick, for the presentation layer to
/// react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A brick was hit and hidden
    BrickDestroyed { row: usize, col: usize },
    /// Every brick has been cleared; the grid was re-shown, score kept
    AllBricksCleared,
    /// The ball crossed the bottom edge; carries the pre-reset score
    RoundEnded { score: u64 },
}

/// Advance the game by one tick
pub fn tick(
    state: &mut RoundState,
    machine: &mut PlayStateMachine,
    input: &TickInput,
) -> Vec<TickEvent> {
    let mut events = Vec::new();

    // Control intents first so this tick's motion sees the new state.
    // Stop is applied last and wins if several arrive in one frame.
    if input.start_or_resume {
        machine.start_or_resume();
    }
    if input.pause {
        machine.pause();
    }
    if input.stop {
        machine.stop();
        state.reset_round();
    }

    let running = machine.is_running();
    move_paddle(state, input.steer, running);
    move_ball(state, machine, running, &mut events);

    events
}

fn move_paddle(state: &mut RoundState, steer: Steer, running: bool) {
    state.paddle.dx = match steer {
        Steer::Left => -state.paddle.speed,
        Steer::Right => state.paddle.speed,
        Steer::None => 0.0,
    };

    if running {
        state.paddle.x += state.paddle.dx;
    }

    // Post-move clamp: x stays in [0, field_width - w] at all times
    state.paddle.x = state.config.clamp_paddle_x(state.paddle.x);
}

fn move_ball(
    state: &mut RoundState,
    machine: &mut PlayStateMachine,
    running: bool,
    events: &mut Vec<TickEvent>,
) {
    if running {
        state.ball.pos += state.ball.vel;
    }

    let walls = collision::reflect_off_walls(
        &state.ball,
        state.config.field_width,
        state.config.field_height,
    );
    if walls.flip_x {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if walls.flip_y {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Fixed upward rebound: magnitude reset to the configured speed, no
    // contact-point physics
    if collision::rebounds_off_paddle(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.speed;
    }

    // Invisible bricks skip the geometric test. Each overlapping brick
    // flips the vertical velocity on its own, so two simultaneous hits
    // cancel out; no short-circuit after the first hit.
    let total = state.config.brick_count();
    for index in 0..state.bricks.bricks.len() {
        if !state.bricks.bricks[index].visible {
            continue;
        }
        if collision::intersects_brick(&state.ball, &state.bricks.bricks[index]) {
            state.ball.vel.y = -state.ball.vel.y;
            state.bricks.bricks[index].visible = false;
            state.score += 1;

            let (row, col) = state.bricks.position_of(index);
            log::debug!("brick ({row}, {col}) destroyed, score {}", state.score);
            events.push(TickEvent::BrickDestroyed { row, col });

            // Checked per destruction: two hits in one tick can cross the
            // multiple-of-grid boundary mid-loop
            if total > 0 && state.score % total == 0 {
                log::info!("all bricks cleared at score {}", state.score);
                state.bricks.show_all();
                events.push(TickEvent::AllBricksCleared);
            }
        }
    }

    // Bottom exit ends the round. The wall check above has already flipped
    // the vertical velocity, and the reset keeps it - the next round
    // serves with the inherited heading.
    if state.ball.bottom() > state.config.field_height {
        let final_score = state.score;
        log::info!("round ended with score {final_score}");
        events.push(TickEvent::RoundEnded { score: final_score });

        state.reset_positions();
        state.bricks.show_all();
        state.score = 0;
        machine.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::fsm::PlayState;
    use glam::Vec2;

    fn new_game() -> (RoundState, PlayStateMachine) {
        (RoundState::new(GameConfig::new()), PlayStateMachine::new())
    }

    fn running_game() -> (RoundState, PlayStateMachine) {
        let (state, mut machine) = new_game();
        machine.start_or_resume();
        (state, machine)
    }

    fn hide_all_bricks(state: &mut RoundState) {
        for brick in &mut state.bricks.bricks {
            brick.visible = false;
        }
    }

    #[test]
    fn test_idle_tick_is_static() {
        let (mut state, mut machine) = new_game();
        let before = state.clone();

        let events = tick(&mut state, &mut machine, &TickInput::default());

        assert!(events.is_empty());
        assert_eq!(state, before);
        assert_eq!(machine.state(), PlayState::Idle);
    }

    #[test]
    fn test_start_intent_starts_motion_same_tick() {
        let (mut state, mut machine) = new_game();
        let input = TickInput {
            start_or_resume: true,
            steer: Steer::Right,
            ..Default::default()
        };

        tick(&mut state, &mut machine, &input);

        assert_eq!(machine.state(), PlayState::Running);
        assert_eq!(state.paddle.x, 360.0 + state.paddle.speed);
        assert_eq!(state.ball.pos, Vec2::new(404.0, 296.0));
    }

    #[test]
    fn test_paused_tick_freezes_positions() {
        let (mut state, mut machine) = running_game();
        for _ in 0..10 {
            tick(&mut state, &mut machine, &TickInput::default());
        }

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &mut machine, &pause);
        assert_eq!(machine.state(), PlayState::Paused);

        let frozen_ball = state.ball.pos;
        let frozen_paddle = state.paddle.x;
        for _ in 0..10 {
            tick(&mut state, &mut machine, &TickInput::default());
        }
        assert_eq!(state.ball.pos, frozen_ball);
        assert_eq!(state.paddle.x, frozen_paddle);
    }

    #[test]
    fn test_wall_flip_applies_while_paused() {
        let (mut state, mut machine) = new_game();
        machine.start_or_resume();
        machine.pause();

        // Paused ball left overlapping the right wall
        state.ball.pos = Vec2::new(795.0, 300.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        tick(&mut state, &mut machine, &TickInput::default());

        assert_eq!(state.ball.pos, Vec2::new(795.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn test_wall_reflection_top_then_right() {
        let (mut state, mut machine) = running_game();
        hide_all_bricks(&mut state);

        // Center launch at (4, -4): the top edge flips dy first, then the
        // right edge flips dx
        let mut saw_dy_flip_at = None;
        let mut saw_dx_flip_at = None;
        for _ in 0..200 {
            let prev = state.ball.vel;
            tick(&mut state, &mut machine, &TickInput::default());
            if prev.y < 0.0 && state.ball.vel.y > 0.0 {
                saw_dy_flip_at = Some(state.ball.pos);
            }
            if prev.x > 0.0 && state.ball.vel.x < 0.0 {
                saw_dx_flip_at = Some(state.ball.pos);
            }
        }

        let top_hit = saw_dy_flip_at.expect("ball never reflected off the top wall");
        assert!(top_hit.y <= state.ball.size + state.ball.speed);
        let right_hit = saw_dx_flip_at.expect("ball never reflected off the right wall");
        assert!(right_hit.x >= state.config.field_width - state.ball.size - state.ball.speed);
    }

    #[test]
    fn test_paddle_rebound_is_fixed_upward() {
        let (mut state, mut machine) = running_game();
        hide_all_bricks(&mut state);

        // Drop the ball straight onto the paddle center at double speed
        state.ball.pos = Vec2::new(400.0, state.paddle.y - state.ball.size + 2.0);
        state.ball.vel = Vec2::new(0.0, 8.0);

        tick(&mut state, &mut machine, &TickInput::default());

        // Magnitude reset to the configured speed, not mirrored
        assert_eq!(state.ball.vel.y, -state.ball.speed);
    }

    #[test]
    fn test_brick_destruction_flips_and_scores() {
        let (mut state, mut machine) = running_game();

        // One step away from the center of brick (0, 0)
        state.ball.pos = Vec2::new(80.0, 74.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &mut machine, &TickInput::default());

        assert_eq!(events, vec![TickEvent::BrickDestroyed { row: 0, col: 0 }]);
        assert_eq!(state.score, 1);
        assert!(!state.bricks.get(0, 0).unwrap().visible);
        assert_eq!(state.bricks.visible_count(), 44);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_double_hit_flips_twice() {
        let (mut state, mut machine) = running_game();

        // Stack brick (0, 1) on top of brick (0, 0) so one position hits
        // both; each hit flips dy, so the flips cancel
        let clone = *state.bricks.get(0, 0).unwrap();
        state.bricks.bricks[1].x = clone.x;
        state.bricks.bricks[1].y = clone.y;

        state.ball.pos = Vec2::new(80.0, 74.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &mut machine, &TickInput::default());

        assert_eq!(
            events,
            vec![
                TickEvent::BrickDestroyed { row: 0, col: 0 },
                TickEvent::BrickDestroyed { row: 0, col: 1 },
            ]
        );
        assert_eq!(state.score, 2);
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_grid_clear_reshows_without_score_reset() {
        let (mut state, mut machine) = running_game();

        // 44 already gone, one brick left
        hide_all_bricks(&mut state);
        state.bricks.bricks[0].visible = true;
        state.score = 44;

        state.ball.pos = Vec2::new(80.0, 74.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &mut machine, &TickInput::default());

        assert_eq!(
            events,
            vec![
                TickEvent::BrickDestroyed { row: 0, col: 0 },
                TickEvent::AllBricksCleared,
            ]
        );
        assert_eq!(state.score, 45);
        assert_eq!(state.bricks.visible_count(), 45);
    }

    #[test]
    fn test_bottom_exit_ends_round() {
        let (mut state, mut machine) = running_game();
        state.score = 7;
        state.ball.pos = Vec2::new(200.0, 595.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let events = tick(&mut state, &mut machine, &TickInput::default());

        assert_eq!(events, vec![TickEvent::RoundEnded { score: 7 }]);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle.x, 360.0);
        assert_eq!(state.bricks.visible_count(), 45);
        assert_eq!(machine.state(), PlayState::Idle);
        // The bottom edge flipped dy before the reset; the heading carries
        // into the next serve
        assert_eq!(state.ball.vel, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_stop_resets_without_round_end() {
        let (mut state, mut machine) = running_game();
        state.score = 12;
        state.bricks.bricks[3].visible = false;
        state.ball.pos = Vec2::new(100.0, 100.0);

        let input = TickInput {
            stop: true,
            ..Default::default()
        };
        let events = tick(&mut state, &mut machine, &input);

        // A stop is not a completed round: no RoundEnded, no score to report
        assert!(events.is_empty());
        assert_eq!(machine.state(), PlayState::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.visible_count(), 45);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_steer_left_holds_at_wall() {
        let (mut state, mut machine) = running_game();
        let input = TickInput {
            steer: Steer::Left,
            ..Default::default()
        };

        // 360 / 8 = 45 ticks to the wall; keep going past it
        for _ in 0..60 {
            tick(&mut state, &mut machine, &input);
        }
        assert_eq!(state.paddle.x, 0.0);
    }
}
