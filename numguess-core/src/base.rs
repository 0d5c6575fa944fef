//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// Observation of an environment.
///
/// Environments in this workspace are not vectorized, so an object of
/// this trait always holds exactly one observation.
pub trait Obs: Clone + Debug {}

/// Action of an environment.
pub trait Act: Clone + Debug {}
