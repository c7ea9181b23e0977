//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - No rendering or platform dependencies
//! - All mutation flows through [`tick()`]

pub mod collision;
pub mod fsm;
pub mod state;
pub mod tick;

pub use collision::{WallReflection, intersects_brick, rebounds_off_paddle, reflect_off_walls};
pub use fsm::{PlayState, PlayStateMachine};
pub use state::{Ball, Brick, BrickGrid, Paddle, RoundState};
pub use tick::{Steer, TickEvent, TickInput, tick};
