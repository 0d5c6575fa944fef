//! Hand-written policies for [`GuessNumberEnv`].
//!
//! They are useful as baselines when training an agent: [`RandomPolicy`] gives
//! the return of an agent that ignores hints, and [`BisectionPolicy`] the
//! return of an optimal one.
use crate::{GuessAct, GuessNumberEnv, GuessNumberError, GuessObs, Observation};
use anyhow::Result;
use numguess_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};

fn check_max_number(max_number: i64) -> Result<(), GuessNumberError> {
    if max_number < 1 {
        return Err(GuessNumberError::InvalidConfig(format!(
            "max_number must be at least 1, got {}",
            max_number
        )));
    }
    Ok(())
}

/// Configuration of [`RandomPolicy`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RandomPolicyConfig {
    /// The largest number to guess.
    pub max_number: i64,

    /// Seed of the random generator. Seeded from the OS if `None`.
    pub seed: Option<u64>,
}

impl Default for RandomPolicyConfig {
    fn default() -> Self {
        Self {
            max_number: 100,
            seed: None,
        }
    }
}

/// Guesses uniformly in `[0, max_number]`, ignoring hints.
pub struct RandomPolicy {
    max_number: i64,
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Constructs a seeded random policy.
    ///
    /// Fails if `max_number < 1`.
    pub fn new(max_number: i64, seed: u64) -> Result<Self> {
        Self::build(RandomPolicyConfig {
            max_number,
            seed: Some(seed),
        })
    }
}

impl Configurable for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        check_max_number(config.max_number)?;
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self {
            max_number: config.max_number,
            rng,
        })
    }
}

impl Policy<GuessNumberEnv> for RandomPolicy {
    fn sample(&mut self, _obs: &GuessObs) -> GuessAct {
        self.rng.i64(0..=self.max_number).into()
    }
}

/// Configuration of [`BisectionPolicy`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BisectionPolicyConfig {
    /// The largest number to guess.
    pub max_number: i64,
}

impl Default for BisectionPolicyConfig {
    fn default() -> Self {
        Self { max_number: 100 }
    }
}

/// Binary search over the interval still consistent with the hints.
///
/// The interval is reset when [`Observation::None`] is observed, i.e. at
/// the beginning of every episode.
pub struct BisectionPolicy {
    max_number: i64,
    low: i64,
    high: i64,
    last_guess: Option<i64>,
}

impl BisectionPolicy {
    /// Constructs a bisection policy on `[0, max_number]`.
    ///
    /// Fails if `max_number < 1`.
    pub fn new(max_number: i64) -> Result<Self> {
        Self::build(BisectionPolicyConfig { max_number })
    }
}

impl Configurable for BisectionPolicy {
    type Config = BisectionPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        check_max_number(config.max_number)?;
        Ok(Self {
            max_number: config.max_number,
            low: 0,
            high: config.max_number,
            last_guess: None,
        })
    }
}

impl Policy<GuessNumberEnv> for BisectionPolicy {
    fn sample(&mut self, obs: &GuessObs) -> GuessAct {
        match (obs.hint(), self.last_guess) {
            (Observation::None, _) | (_, None) => {
                self.low = 0;
                self.high = self.max_number;
            }
            (Observation::Higher, Some(guess)) => self.low = guess + 1,
            (Observation::Lower, Some(guess)) => self.high = guess - 1,
            (Observation::Correct, Some(guess)) => {
                self.low = guess;
                self.high = guess;
            }
        }

        let guess = self.low + (self.high - self.low) / 2;
        self.last_guess = Some(guess);
        guess.into()
    }
}
