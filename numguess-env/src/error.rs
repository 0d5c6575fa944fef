//! Errors of [`GuessNumberEnv`](crate::GuessNumberEnv).
use thiserror::Error;

/// Errors of [`GuessNumberEnv`](crate::GuessNumberEnv).
#[derive(Error, Debug, PartialEq)]
pub enum GuessNumberError {
    /// The episode has ended; the environment must be reset before stepping.
    #[error("Episode is done, reset the environment before stepping")]
    EpisodeOver,

    /// Configuration rejected at build time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
