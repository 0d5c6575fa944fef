//! Policy.
use super::Env;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// A policy on an environment.
///
/// Maps an observation to an action, deterministically or not.
pub trait Policy<E: Env> {
    /// Sample an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// An object built from a deserializable configuration.
pub trait Configurable {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the object, failing if `config` is not valid.
    fn build(config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Builds the object with the configuration in the YAML file at `path`.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let rdr = BufReader::new(File::open(path)?);
        let config = serde_yaml::from_reader(rdr)?;
        Self::build(config)
    }
}
