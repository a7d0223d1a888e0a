//! Environments for the agent anatomy loop
//!
//! This crate provides:
//! - [`RandomRewardEnv`], a fixed-length episode paying random rewards
//! - [`RecordingEnvironment`], a wrapper keeping every reward paid out

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod random_reward;
pub mod wrappers;

// Re-export environments
pub use random_reward::RandomRewardEnv;
pub use wrappers::RecordingEnvironment;

// Re-export core types
pub use anatomy_core::{
    DiscreteAction, Environment, EnvironmentConfig, Observation, Reward, VectorObservation,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{RandomRewardEnv, RecordingEnvironment};
    pub use anatomy_core::prelude::*;
}
