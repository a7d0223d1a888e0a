//! Environment traits and types

use serde::{Deserialize, Serialize};

use crate::{Action, Observation, Reward};

/// Configuration for environments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Random seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Number of actions accepted before the episode is done
    pub max_steps: usize,
    /// Size of the legal action set
    pub num_actions: usize,
    /// Length of the observation vector
    pub observation_dim: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_steps: 10,
            num_actions: 2,
            observation_dim: 3,
        }
    }
}

impl EnvironmentConfig {
    /// Set the random seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the episode length
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Check the configuration can describe a playable environment
    pub fn validate(&self) -> crate::Result<()> {
        if self.num_actions == 0 {
            return Err(crate::RLError::InvalidConfig(
                "num_actions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Core environment trait
///
/// An environment is either active or done. Only [`Environment::action`]
/// moves it from active to done, and nothing moves it back.
pub trait Environment {
    /// Observation type
    type Observation: Observation;
    /// Action type
    type Action: Action;

    /// Current observation. Available whether or not the episode is over.
    fn observation(&self) -> Self::Observation;

    /// Actions the agent may currently submit
    fn actions(&self) -> Vec<Self::Action>;

    /// Whether the episode has ended
    fn is_done(&self) -> bool;

    /// Resolve one step and return its reward.
    ///
    /// Fails with [`crate::RLError::EpisodeAlreadyEnded`] without touching any
    /// state once [`Environment::is_done`] is true.
    fn action(&mut self, action: Self::Action) -> crate::Result<Reward>;
}
