//! Action for [`GuessNumberEnv`](crate::GuessNumberEnv).
use numguess_core::Act;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A guess of the hidden number.
///
/// The action space is `[0, max_number]`, but guesses out of the range are
/// not rejected: they are compared with the target like any other guess.
pub struct GuessAct {
    /// The guessed number.
    pub guess: i64,
}

impl GuessAct {
    /// Constructs a guess of `guess`.
    pub fn new(guess: i64) -> Self {
        Self { guess }
    }
}

impl Act for GuessAct {}

impl From<i64> for GuessAct {
    fn from(guess: i64) -> Self {
        Self { guess }
    }
}
