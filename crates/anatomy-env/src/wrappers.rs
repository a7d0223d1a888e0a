//! Environment wrappers

use anatomy_core::{Environment, Result, Reward};

/// Wrapper that records every reward the inner environment pays out.
///
/// Refused actions are passed through and leave the record untouched.
#[derive(Debug, Clone)]
pub struct RecordingEnvironment<E> {
    /// Inner environment
    pub env: E,
    /// Rewards of accepted actions, in order
    rewards: Vec<Reward>,
}

impl<E> RecordingEnvironment<E> {
    /// Create a new recording wrapper
    pub fn new(env: E) -> Self {
        Self {
            env,
            rewards: Vec::new(),
        }
    }

    /// Rewards returned so far
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Number of accepted actions
    pub fn accepted(&self) -> usize {
        self.rewards.len()
    }

    /// Sum of all recorded rewards
    pub fn total_reward(&self) -> Reward {
        self.rewards.iter().sum()
    }

    /// Unwrap the inner environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E> Environment for RecordingEnvironment<E>
where
    E: Environment,
{
    type Observation = E::Observation;
    type Action = E::Action;

    fn observation(&self) -> Self::Observation {
        self.env.observation()
    }

    fn actions(&self) -> Vec<Self::Action> {
        self.env.actions()
    }

    fn is_done(&self) -> bool {
        self.env.is_done()
    }

    fn action(&mut self, action: Self::Action) -> Result<Reward> {
        let reward = self.env.action(action)?;
        self.rewards.push(reward);
        Ok(reward)
    }
}
