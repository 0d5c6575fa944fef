//! Observation for [`GuessNumberEnv`](crate::GuessNumberEnv).
use numguess_core::Obs;
use std::cmp::Ordering;

/// Hint given to the agent after a guess.
///
/// The discriminants are the numeric encoding fed to models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Observation {
    /// No guess has been made in this episode yet.
    None = 0,

    /// The last guess equals the target.
    Correct = 1,

    /// The target is lower than the last guess.
    Lower = 2,

    /// The target is higher than the last guess.
    Higher = 3,
}

impl Observation {
    /// Lower bound of the observation space.
    pub const LOW: f32 = Observation::None as u8 as f32;

    /// Upper bound of the observation space.
    pub const HIGH: f32 = Observation::Higher as u8 as f32;

    /// Hint for `guess` when the hidden number is `target`.
    pub fn from_guess(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => Observation::Higher,
            Ordering::Greater => Observation::Lower,
            Ordering::Equal => Observation::Correct,
        }
    }
}

impl From<Observation> for f32 {
    fn from(obs: Observation) -> Self {
        obs as u8 as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observation of [`GuessNumberEnv`](crate::GuessNumberEnv).
pub struct GuessObs {
    hint: Observation,
}

impl GuessObs {
    /// The hint carried by this observation.
    pub fn hint(&self) -> Observation {
        self.hint
    }

    /// Encodes the observation as a single-element vector.
    pub fn to_vec(&self) -> Vec<f32> {
        vec![self.hint.into()]
    }
}

impl Obs for GuessObs {}

impl From<Observation> for GuessObs {
    fn from(hint: Observation) -> Self {
        Self { hint }
    }
}

impl From<GuessObs> for Vec<f32> {
    fn from(obs: GuessObs) -> Self {
        obs.to_vec()
    }
}
