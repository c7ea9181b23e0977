//! Persisted high score
//!
//! One integer survives across rounds and sessions. [`ScoreStore`] is the
//! persistence boundary: a missing or unreadable value reads as 0, a
//! failed write is logged and dropped. The simulation stays correct when
//! persistence is a no-op.

use std::fs;
use std::path::PathBuf;

/// Where the single high-score integer lives
pub trait ScoreStore {
    /// Stored high score; 0 when nothing has been stored yet
    fn read(&self) -> u64;
    /// Replace the stored high score
    fn write(&mut self, score: u64);
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    score: Option<u64>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> u64 {
        self.score.unwrap_or(0)
    }

    fn write(&mut self, score: u64) {
        self.score = Some(score);
    }
}

/// File-backed store: one JSON integer
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn read(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(score) => score,
                Err(err) => {
                    log::warn!(
                        "unreadable high score in {} ({err}), treating as 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!(
                    "no stored high score at {}, starting from 0",
                    self.path.display()
                );
                0
            }
        }
    }

    fn write(&mut self, score: u64) {
        if let Ok(json) = serde_json::to_string(&score) {
            match fs::write(&self.path, json) {
                Ok(()) => log::info!("high score {score} saved"),
                Err(err) => log::warn!("failed to store high score: {err}"),
            }
        }
    }
}

/// Caller-side view of the stored high score
///
/// Mirrors the stored value so the driver can display it every frame
/// without re-reading the store; consulted and updated only at round-end.
#[derive(Debug, Clone, Copy)]
pub struct HighScore {
    current: u64,
}

impl HighScore {
    pub fn load(store: &impl ScoreStore) -> Self {
        Self {
            current: store.read(),
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    /// Report a completed round. Writes through and returns true only when
    /// the round strictly beat the stored value - the presentation layer
    /// reacts with its celebration; ties leave the store untouched.
    pub fn submit(&mut self, store: &mut impl ScoreStore, round_score: u64) -> bool {
        if round_score > self.current {
            self.current = round_score;
            store.write(round_score);
            true
        } else {
            false
        }
    }
}
