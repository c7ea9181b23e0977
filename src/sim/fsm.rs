//! Play-state machine
//!
//! Tracks whether the simulation is idle, running, or paused, and gates
//! whether motion is applied each tick. There is no terminal state - the
//! machine runs for the process lifetime.

use serde::{Deserialize, Serialize};

/// Current play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayState {
    /// Initial and post-reset state
    #[default]
    Idle,
    /// Ball and paddle respond to simulation and input
    Running,
    /// Simulation frozen, state retained
    Paused,
}

/// Play-state machine owned by the driver, one per game session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayStateMachine {
    state: PlayState,
}

impl PlayStateMachine {
    pub fn new() -> Self {
        Self {
            state: PlayState::Idle,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Whether motion is applied this tick
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Idle or Paused -> Running; no-op while already Running.
    ///
    /// The keyboard adapter emits this for any key press while idle or
    /// paused, not only the directional keys.
    pub fn start_or_resume(&mut self) {
        match self.state {
            PlayState::Idle | PlayState::Paused => {
                log::debug!("play state {:?} -> Running", self.state);
                self.state = PlayState::Running;
            }
            PlayState::Running => {}
        }
    }

    /// Running -> Paused; no-op elsewhere
    pub fn pause(&mut self) {
        if self.state == PlayState::Running {
            log::debug!("play state Running -> Paused");
            self.state = PlayState::Paused;
        }
    }

    /// Any state -> Idle. The caller performs the full round reset that
    /// goes with it.
    pub fn stop(&mut self) {
        if self.state != PlayState::Idle {
            log::debug!("play state {:?} -> Idle", self.state);
        }
        self.state = PlayState::Idle;
    }
}
