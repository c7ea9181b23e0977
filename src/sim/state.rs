//! Round state and core simulation types
//!
//! All state owned by one play session lives here. `RoundState` is the sole
//! owner of the ball, paddle, brick grid, and running score; the driver
//! mutates it only through [`super::tick()`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{BrickConfig, GameConfig};

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius in pixels
    pub size: f32,
    /// Configured speed magnitude; a paddle rebound resets `vel.y` to
    /// `-speed` regardless of the incoming angle
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start(),
            vel: Vec2::new(config.ball.speed, -config.ball.speed),
            size: config.ball.size,
            speed: config.ball.speed,
        }
    }

    /// Put the ball back at field center. Velocity is not reset; a new
    /// round keeps the previous heading.
    pub fn reset_position(&mut self, config: &GameConfig) {
        self.pos = config.ball_start();
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Pixels per tick while a steering intent is held
    pub speed: f32,
    /// Current horizontal velocity, rewritten every tick from the sampled
    /// steering intent
    pub dx: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.paddle_start_x(),
            y: config.paddle_y(),
            w: config.paddle.w,
            h: config.paddle.h,
            speed: config.paddle.speed,
            dx: 0.0,
        }
    }

    /// Re-center the paddle for a new round
    pub fn reset_position(&mut self, config: &GameConfig) {
        self.x = config.paddle_start_x();
        self.y = config.paddle_y();
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }
}

/// A single brick; geometry never changes after construction, only
/// `visible` toggles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub visible: bool,
}

impl Brick {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Row-major grid of bricks
///
/// Rows index across the x axis, columns down the y axis. Iteration order
/// never affects correctness: each brick is independently tested once per
/// tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
    rows: usize,
    cols: usize,
}

impl BrickGrid {
    pub fn new(config: &BrickConfig) -> Self {
        let mut bricks = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                bricks.push(Brick {
                    x: row as f32 * (config.w + config.padding) + config.offset_x,
                    y: col as f32 * (config.h + config.padding) + config.offset_y,
                    w: config.w,
                    h: config.h,
                    visible: true,
                });
            }
        }
        Self {
            bricks,
            rows: config.rows,
            cols: config.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    /// (row, col) of a brick by its index in `bricks`
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Make every brick visible again
    pub fn show_all(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}

/// Complete state of one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Running round score; the persisted high score lives with the driver
    pub score: u64,
}

impl RoundState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: BrickGrid::new(&config.bricks),
            score: 0,
            config,
        }
    }

    /// Send ball and paddle back to their start positions
    pub fn reset_positions(&mut self) {
        self.ball.reset_position(&self.config);
        self.paddle.reset_position(&self.config);
    }

    /// Full round reset: positions home, all bricks visible, score zero
    pub fn reset_round(&mut self) {
        self.reset_positions();
        self.bricks.show_all();
        self.score = 0;
    }
}
