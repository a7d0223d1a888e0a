//! Core agent/environment traits and types
//!
//! This crate provides the vocabulary shared by environments, agents and the
//! episode driver: actions, observations, rewards, the two interaction traits
//! and the error type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod agent;
pub mod environment;
pub mod episode;
pub mod error;
pub mod observation;
pub mod reward;

// Re-export core traits and types
pub use action::{Action, DiscreteAction};
pub use agent::Agent;
pub use environment::{Environment, EnvironmentConfig};
pub use episode::{run_episode, EpisodeSummary};
pub use error::{RLError, Result};
pub use observation::{Observation, VectorObservation};
pub use reward::Reward;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        run_episode, Action, Agent, DiscreteAction, Environment, EnvironmentConfig,
        EpisodeSummary, Observation, RLError, Result, Reward, VectorObservation,
    };
}
