#![warn(missing_docs)]
//! Core abstractions for the number guessing environment.
//!
//! The traits in this crate decouple environments from the code that
//! drives them. An environment implements [`Env`], an agent or a
//! hand-written strategy implements [`Policy`], and [`DefaultEvaluator`]
//! runs the two together for a fixed number of episodes.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
