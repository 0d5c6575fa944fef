//! Guess-the-number environment for reinforcement learning.
//!
//! The agent has to find a hidden number in `[0, max_number]`. After every
//! guess it observes a hint ([`Observation::Higher`], [`Observation::Lower`]
//! or [`Observation::Correct`]). The step budget, `floor(log2(max_number)) + 1`,
//! is just enough for bisection when `max_number` is 100.
//!
//! By default only the last step of an episode is rewarded, with the negative
//! absolute distance between the last guess and the target. See
//! [`RewardShaping`] for the alternative with a penalty on every step.
//!
//! ```
//! use anyhow::Result;
//! use numguess_core::{DefaultEvaluator, Env as _, Evaluator as _};
//! use numguess_env::{
//!     BisectionPolicy, GuessAct, GuessNumberEnv, GuessNumberEnvConfig, Observation,
//! };
//!
//! fn main() -> Result<()> {
//!     let config = GuessNumberEnvConfig::default();
//!
//!     // Plays a single step by hand
//!     let mut env = GuessNumberEnv::build(&config, 42)?;
//!     let obs = env.reset()?;
//!     assert_eq!(obs.hint(), Observation::None);
//!     let (step, _record) = env.step(&GuessAct::new(50))?;
//!     let (_obs, _reward, _done, info) = step.into_parts();
//!     assert_eq!(info.actions, vec![50]);
//!
//!     // Evaluates bisection over 10 episodes
//!     let mut policy = BisectionPolicy::new(config.max_number)?;
//!     let record = DefaultEvaluator::<GuessNumberEnv>::new(&config, 42, 10)?.evaluate(&mut policy)?;
//!     assert_eq!(record.get_scalar("Episode return")?, 0.0);
//!
//!     Ok(())
//! }
//! ```
mod act;
mod env;
mod error;
mod obs;
mod policy;
pub use act::GuessAct;
pub use env::{default_max_steps, GuessInfo, GuessNumberEnv, GuessNumberEnvConfig, RewardShaping};
pub use error::GuessNumberError;
pub use obs::{GuessObs, Observation};
pub use policy::{BisectionPolicy, BisectionPolicyConfig, RandomPolicy, RandomPolicyConfig};
