//! Brick Breakout - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, round state, tick loop)
//! - `config`: Field and entity configuration
//! - `highscores`: Persisted high score store
//! - `input`: Intent folding between the input adapter and the tick loop
//!
//! Rendering and raw input devices are external collaborators: a driver
//! samples an [`input::IntentState`] once per frame, calls [`sim::tick()`],
//! and draws from shared borrows of the [`sim::RoundState`] fields. The
//! core never calls back into the presentation layer; everything it has to
//! say comes back as [`sim::TickEvent`]s.

pub mod config;
pub mod highscores;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use highscores::{HighScore, ScoreStore};

/// Default game dimensions and speeds
pub mod consts {
    /// Play field size in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults - launched from field center at a fixed diagonal
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0;

    /// Paddle defaults - rides 20px above the bottom edge
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 20.0;

    /// Brick grid defaults - rows run across the x axis
    pub const BRICK_ROWS: usize = 9;
    pub const BRICK_COLS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;
}
