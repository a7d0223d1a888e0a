//! Agent traits

use crate::{Environment, Reward};

/// Core agent trait
///
/// An agent drives one interaction step at a time against an environment and
/// keeps the reward it has collected so far.
pub trait Agent<E: Environment> {
    /// Observe, pick an action, submit it and accrue the returned reward.
    ///
    /// Errors from the environment propagate unchanged, leaving the
    /// accumulated reward as it was.
    fn step(&mut self, env: &mut E) -> crate::Result<Reward>;

    /// Reward accumulated over all successful steps
    fn total_reward(&self) -> Reward;
}
