//! Input intents and per-frame folding
//!
//! The presentation layer captures key and button events asynchronously
//! and pushes discrete [`Intent`]s here; the driver samples exactly one
//! [`TickInput`] per frame. Steering is last-write-wins between frames,
//! control intents are one-shot flags drained by the sample. This keeps
//! input timing decoupled from simulation timing - no callback ever
//! re-enters the round state.

use crate::sim::{Steer, TickInput};

/// A discrete input signal, decoupled from raw device events
///
/// Rules-panel visibility is presentation-only state and never becomes an
/// intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    /// Directional key released
    StopMoving,
    /// Play button, or any key press while idle or paused
    StartOrResume,
    Pause,
    Stop,
}

/// Folds asynchronously arriving intents into one input per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentState {
    steer: Steer,
    start_or_resume: bool,
    pause: bool,
    stop: bool,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intent; later writes win within a frame
    pub fn push(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => self.steer = Steer::Left,
            Intent::MoveRight => self.steer = Steer::Right,
            Intent::StopMoving => self.steer = Steer::None,
            Intent::StartOrResume => self.start_or_resume = true,
            Intent::Pause => self.pause = true,
            Intent::Stop => self.stop = true,
        }
    }

    /// Produce this frame's input. Control flags are drained; steering
    /// persists until a release or an opposite press arrives, like a held
    /// key.
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            steer: self.steer,
            start_or_resume: self.start_or_resume,
            pause: self.pause,
            stop: self.stop,
        };
        self.start_or_resume = false;
        self.pause = false;
        self.stop = false;
        input
    }
}
