mod config;
use crate::{GuessAct, GuessNumberError, GuessObs, Observation};
use anyhow::Result;
pub use config::{default_max_steps, GuessNumberEnvConfig, RewardShaping};
use log::{debug, info, trace};
use numguess_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const VERSION: &str = "0.0.1";

/// Information attached to every [`Step`] of [`GuessNumberEnv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInfo {
    /// The hidden number of the episode.
    pub target: i64,

    /// Guesses made so far in the episode, oldest first.
    pub actions: Vec<i64>,
}

impl Info for GuessInfo {}

/// Guess-the-number game.
///
/// A target is drawn uniformly from `[0, max_number]` at every reset. After
/// each guess the agent observes whether the target is higher, lower or
/// equal to the guess. An episode ends on a correct guess (terminated) or
/// when the step budget is used up (truncated).
pub struct GuessNumberEnv {
    max_number: i64,
    max_steps: usize,
    reward: RewardShaping,

    // Seed given at build time or by the last call of `seed()`
    seed: i64,
    rng: SmallRng,

    // Episode state
    target: i64,
    steps_remaining: usize,
    is_over: bool,
    actions: Vec<i64>,
    obs: Observation,
}

impl GuessNumberEnv {
    /// The largest number the target can take.
    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    /// Step budget of an episode.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Size of the discrete action space, `max_number + 1`.
    pub fn n_actions(&self) -> usize {
        self.max_number as usize + 1
    }

    /// Remaining guesses in the current episode.
    pub fn steps_remaining(&self) -> usize {
        self.steps_remaining
    }

    /// Whether the current episode has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The last observation.
    pub fn obs(&self) -> GuessObs {
        self.obs.into()
    }

    /// Target and guesses of the current episode.
    pub fn info(&self) -> GuessInfo {
        GuessInfo {
            target: self.target,
            actions: self.actions.clone(),
        }
    }

    fn reward(&self, guess: i64) -> f32 {
        if self.is_over {
            -(guess.abs_diff(self.target) as f32)
        } else {
            self.reward.intermediate_reward()
        }
    }
}

impl Env for GuessNumberEnv {
    type Config = GuessNumberEnvConfig;
    type Obs = GuessObs;
    type Act = GuessAct;
    type Info = GuessInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        info!("GuessNumberEnv - Version {}", VERSION);

        let max_steps = config.step_budget();
        let mut env = Self {
            max_number: config.max_number,
            max_steps,
            reward: config.reward,
            seed,
            rng: SmallRng::seed_from_u64(seed as u64),
            target: 0,
            steps_remaining: max_steps,
            is_over: false,
            actions: vec![],
            obs: Observation::None,
        };
        env.reset()?;

        Ok(env)
    }

    fn seed(&mut self, seed: i64) {
        self.seed = seed;
        self.rng = SmallRng::seed_from_u64(seed as u64);
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.is_over = false;
        self.steps_remaining = self.max_steps;
        self.target = self.rng.gen_range(0..=self.max_number);
        self.actions.clear();
        self.obs = Observation::None;
        debug!(
            "New episode: max_number = {}, max_steps = {}",
            self.max_number, self.max_steps
        );

        Ok(self.obs.into())
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.rng = SmallRng::seed_from_u64((self.seed as u64).wrapping_add(ix as u64));
        self.reset()
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        if self.is_over {
            return Err(GuessNumberError::EpisodeOver.into());
        }

        let guess = a.guess;
        self.actions.push(guess);
        self.steps_remaining -= 1;

        let is_terminated = guess == self.target;
        let is_truncated = !is_terminated && self.steps_remaining == 0;
        self.is_over = is_terminated || is_truncated;
        self.obs = Observation::from_guess(guess, self.target);
        let reward = self.reward(guess);
        trace!(
            "guess = {}, obs = {:?}, reward = {}, steps_remaining = {}",
            guess,
            self.obs,
            reward,
            self.steps_remaining
        );

        let mut record = Record::from_slice(&[
            (
                "steps_remaining",
                RecordValue::Scalar(self.steps_remaining as f32),
            ),
            (
                "actions",
                RecordValue::Array1(self.actions.iter().map(|&a| a as f32).collect()),
            ),
        ]);
        if self.is_over {
            let distance = guess.abs_diff(self.target) as f32;
            record.insert("distance", RecordValue::Scalar(distance));
        }

        let step = Step::new(
            self.obs.into(),
            *a,
            reward,
            is_terminated,
            is_truncated,
            self.info(),
        );

        Ok((step, record))
    }
}
