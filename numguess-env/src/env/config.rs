//! Configuration of [`GuessNumberEnv`](super::GuessNumberEnv).
use crate::GuessNumberError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Reward given on steps that do not end the episode.
///
/// The step that ends an episode is always rewarded with the negative
/// absolute distance between the last guess and the target.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub enum RewardShaping {
    /// Zero reward until the last step.
    TerminalOnly,

    /// A constant penalty `-p` on every intermediate step.
    StepPenalty(f32),
}

impl Default for RewardShaping {
    fn default() -> Self {
        Self::TerminalOnly
    }
}

impl RewardShaping {
    /// Reward of a step that does not end the episode.
    pub fn intermediate_reward(&self) -> f32 {
        match self {
            Self::TerminalOnly => 0.0,
            Self::StepPenalty(p) => -p,
        }
    }
}

/// Number of guesses bisection needs on `[0, max_number]`, `floor(log2(max_number)) + 1`.
pub fn default_max_steps(max_number: i64) -> usize {
    (max_number.max(1) as u64).ilog2() as usize + 1
}

/// Configuration of [`GuessNumberEnv`](super::GuessNumberEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct GuessNumberEnvConfig {
    /// The largest number the target can take. Targets are drawn from `[0, max_number]`.
    pub max_number: i64,

    /// Step budget of an episode. Defaults to [`default_max_steps`] of `max_number`.
    pub max_steps: Option<usize>,

    /// Reward on intermediate steps.
    pub reward: RewardShaping,
}

impl Default for GuessNumberEnvConfig {
    fn default() -> Self {
        Self {
            max_number: 100,
            max_steps: None,
            reward: RewardShaping::default(),
        }
    }
}

impl GuessNumberEnvConfig {
    /// Sets the largest number of the target.
    pub fn max_number(mut self, v: i64) -> Self {
        self.max_number = v;
        self
    }

    /// Overrides the step budget.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets reward shaping.
    pub fn reward(mut self, v: RewardShaping) -> Self {
        self.reward = v;
        self
    }

    /// Step budget of an episode.
    pub fn step_budget(&self) -> usize {
        self.max_steps
            .unwrap_or_else(|| default_max_steps(self.max_number))
    }

    /// Checks the values of the configuration.
    pub fn validate(&self) -> Result<(), GuessNumberError> {
        if self.max_number < 1 {
            return Err(GuessNumberError::InvalidConfig(format!(
                "max_number must be at least 1, got {}",
                self.max_number
            )));
        }
        if self.max_steps == Some(0) {
            return Err(GuessNumberError::InvalidConfig(
                "max_steps must be at least 1".to_string(),
            ));
        }
        if let RewardShaping::StepPenalty(p) = self.reward {
            if !p.is_finite() {
                return Err(GuessNumberError::InvalidConfig(format!(
                    "step penalty must be finite, got {}",
                    p
                )));
            }
        }
        Ok(())
    }

    /// Constructs [`GuessNumberEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GuessNumberEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
