//! Field and entity configuration
//!
//! Everything the simulation needs to lay out a round: field size, paddle
//! and ball dimensions/speeds, and the brick grid geometry. The defaults
//! give the classic 800x600 field with a 9x5 grid; drivers may deserialize
//! a custom configuration instead.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Paddle dimensions and horizontal speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub w: f32,
    pub h: f32,
    /// Pixels moved per tick while steering
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

/// Ball radius and speed magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    /// Radius in pixels
    pub size: f32,
    /// Speed magnitude per axis; the paddle rebound resets vertical
    /// velocity to exactly this
    pub speed: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }
}

/// Brick grid layout
///
/// Rows are laid out across the x axis and columns down the y axis:
/// brick (row, col) sits at `(row * (w + padding) + offset_x,
/// col * (h + padding) + offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickConfig {
    pub rows: usize,
    pub cols: usize,
    pub w: f32,
    pub h: f32,
    pub padding: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            w: BRICK_WIDTH,
            h: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_x: BRICK_OFFSET_X,
            offset_y: BRICK_OFFSET_Y,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub bricks: BrickConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bricks in the grid; the score wraps the grid back to visible
    /// at every positive multiple of this
    pub fn brick_count(&self) -> u64 {
        (self.bricks.rows * self.bricks.cols) as u64
    }

    /// Ball starting position (field center)
    pub fn ball_start(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Paddle starting x (centered)
    pub fn paddle_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle.w / 2.0
    }

    /// Paddle resting y (fixed for the whole session)
    pub fn paddle_y(&self) -> f32 {
        self.field_height - PADDLE_BOTTOM_MARGIN
    }

    /// Clamp a paddle x into the field
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.field_width - self.paddle.w)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            bricks: BrickConfig::default(),
        }
    }
}
