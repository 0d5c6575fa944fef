//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return across all episodes.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;
use chrono::Local;
use log::info;

/// A default implementation of the [`Evaluator`] trait.
///
/// This evaluator runs a specified number of episodes and calculates the average
/// return (cumulative reward) and the average episode length.
///
/// # Examples
///
/// ```ignore
/// let config = GuessNumberEnvConfig::default();
/// let mut evaluator = DefaultEvaluator::<GuessNumberEnv>::new(&config, 42, 10)?;
///
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Evaluates a policy by running multiple episodes.
    ///
    /// Episode `ix` starts with [`Env::reset_with_index`], so evaluation of
    /// the same policy on the same seed is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment fails to reset or to step.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut n_steps = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_total += step.reward;
                n_steps += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let n = self.n_episodes.max(1) as f32;
        let episode_return = r_total / n;
        let episode_length = n_steps as f32 / n;
        info!(
            "Evaluated {} episodes: return = {}, length = {}",
            self.n_episodes, episode_return, episode_length
        );

        let mut record = Record::from_scalar("Episode return", episode_return);
        record.insert("Episode length", RecordValue::Scalar(episode_length));
        record.insert("Evaluated at", RecordValue::DateTime(Local::now()));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
