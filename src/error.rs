//! Error types for hiit-core.

use thiserror::Error;

/// Error type for hiit-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Workout has no rounds")]
    EmptyWorkout,

    #[error("Round {round} has no exercises")]
    EmptyRound { round: usize },

    #[error("Round {round} has exercise duration {seconds}. Must be positive")]
    InvalidExerciseDuration { round: usize, seconds: f64 },

    #[error("Round {round} has rest duration {seconds}. Must be non-negative")]
    InvalidRestDuration { round: usize, seconds: f64 },

    #[error("Round {round} has repeat count {count}. Must be at least 1")]
    InvalidRepeatCount { round: usize, count: u32 },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
