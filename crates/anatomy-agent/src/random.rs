//! Random agent for baseline comparisons

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use anatomy_core::{Agent, Environment, RLError, Result, Reward};

/// Random agent that selects actions uniformly at random and keeps the
/// reward it collects
#[derive(Debug, Clone)]
pub struct RandomAgent<R = StdRng> {
    /// Action selection source
    rng: R,
    /// Reward accumulated so far
    total_reward: Reward,
    /// Successful steps taken
    steps: usize,
}

impl RandomAgent<StdRng> {
    /// Create a new random agent seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a new random agent with a reproducible seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    /// Create a new random agent choosing actions with `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            total_reward: Reward::ZERO,
            steps: 0,
        }
    }

    /// Successful steps taken
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Reward accumulated so far
    pub fn total_reward(&self) -> Reward {
        self.total_reward
    }
}

impl<E, R> Agent<E> for RandomAgent<R>
where
    E: Environment,
    R: Rng,
{
    fn step(&mut self, env: &mut E) -> Result<Reward> {
        // Fetched to mirror the observe-act cycle; a random agent has no use for it.
        let _observation = env.observation();

        let actions = env.actions();
        let action = actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or(RLError::NoLegalActions)?;
        trace!(?action, "selected action");

        let reward = env.action(action)?;
        self.total_reward += reward;
        self.steps += 1;
        Ok(reward)
    }

    fn total_reward(&self) -> Reward {
        self.total_reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_core::{run_episode, DiscreteAction, EnvironmentConfig, VectorObservation};
    use anatomy_env::{RandomRewardEnv, RecordingEnvironment};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn seeded_env(max_steps: usize, seed: u64) -> RecordingEnvironment<RandomRewardEnv> {
        let config = EnvironmentConfig::default()
            .with_seed(seed)
            .with_max_steps(max_steps);
        RecordingEnvironment::new(RandomRewardEnv::new(config).unwrap())
    }

    #[test]
    fn test_default_episode() {
        let mut env = seeded_env(10, 11);
        let mut agent = RandomAgent::seeded(12);

        let summary = run_episode(&mut env, &mut agent).unwrap();

        assert_eq!(summary.steps, 10);
        assert_eq!(agent.steps(), 10);
        assert_eq!(env.accepted(), 10);
        assert!(env.is_done());
        let total = summary.total_reward.value();
        assert!((0.0..10.0).contains(&total));
        assert_relative_eq!(total, env.total_reward().value(), epsilon = 1e-9);
    }

    #[test]
    fn test_done_at_start() {
        let mut env = seeded_env(0, 1);
        let mut agent = RandomAgent::seeded(2);

        let summary = run_episode(&mut env, &mut agent).unwrap();

        assert_eq!(summary.steps, 0);
        assert_eq!(agent.total_reward(), Reward::ZERO);
        assert_eq!(env.accepted(), 0);
    }

    #[test]
    fn test_step_after_done_propagates() {
        let mut env = seeded_env(1, 5);
        let mut agent = RandomAgent::seeded(6);

        let reward = agent.step(&mut env).unwrap();
        assert_eq!(agent.step(&mut env), Err(RLError::EpisodeAlreadyEnded));

        assert_eq!(agent.total_reward(), reward);
        assert_eq!(agent.steps(), 1);
        assert_eq!(env.into_inner().steps_left(), 0);
    }

    #[test]
    fn test_same_seeds_reproduce_episode() {
        let run = || {
            let mut env = seeded_env(10, 100);
            let mut agent = RandomAgent::seeded(200);
            run_episode(&mut env, &mut agent).unwrap()
        };
        assert_eq!(run(), run());
    }

    /// Counts queries and reports an empty action set
    struct NoActions {
        observed: Cell<usize>,
        submitted: usize,
    }

    impl Environment for NoActions {
        type Observation = VectorObservation;
        type Action = DiscreteAction;

        fn observation(&self) -> VectorObservation {
            self.observed.set(self.observed.get() + 1);
            VectorObservation::zeros(3)
        }

        fn actions(&self) -> Vec<DiscreteAction> {
            Vec::new()
        }

        fn is_done(&self) -> bool {
            false
        }

        fn action(&mut self, _action: DiscreteAction) -> Result<Reward> {
            self.submitted += 1;
            Ok(Reward(1.0))
        }
    }

    #[test]
    fn test_empty_action_set() {
        let mut env = NoActions {
            observed: Cell::new(0),
            submitted: 0,
        };
        let mut agent = RandomAgent::seeded(0);

        assert_eq!(agent.step(&mut env), Err(RLError::NoLegalActions));
        assert_eq!(env.observed.get(), 1);
        assert_eq!(env.submitted, 0);
        assert_eq!(agent.total_reward(), Reward::ZERO);
    }

    /// Tallies submitted actions for a fixed number of steps
    struct Tally {
        left: usize,
        counts: [usize; 2],
    }

    impl Environment for Tally {
        type Observation = VectorObservation;
        type Action = DiscreteAction;

        fn observation(&self) -> VectorObservation {
            VectorObservation::zeros(3)
        }

        fn actions(&self) -> Vec<DiscreteAction> {
            DiscreteAction::range(2)
        }

        fn is_done(&self) -> bool {
            self.left == 0
        }

        fn action(&mut self, action: DiscreteAction) -> Result<Reward> {
            if self.is_done() {
                return Err(RLError::EpisodeAlreadyEnded);
            }
            self.left -= 1;
            self.counts[action.0] += 1;
            Ok(Reward(0.0))
        }
    }

    #[test]
    fn test_choices_cover_action_set() {
        let mut env = Tally {
            left: 200,
            counts: [0; 2],
        };
        let mut agent = RandomAgent::seeded(9);

        run_episode(&mut env, &mut agent).unwrap();

        assert_eq!(env.counts.iter().sum::<usize>(), 200);
        assert!(env.counts.iter().all(|&n| n > 50));
    }

    proptest! {
        #[test]
        fn prop_episode_length_and_total(max_steps in 0usize..50, env_seed in any::<u64>(), agent_seed in any::<u64>()) {
            let mut env = seeded_env(max_steps, env_seed);
            let mut agent = RandomAgent::seeded(agent_seed);

            let summary = run_episode(&mut env, &mut agent).unwrap();

            prop_assert_eq!(summary.steps, max_steps);
            prop_assert_eq!(env.accepted(), max_steps);
            prop_assert!(env.is_done());
            prop_assert!(env.rewards().iter().all(|r| (0.0..1.0).contains(&r.value())));
            prop_assert!((summary.total_reward.value() - env.total_reward().value()).abs() < 1e-9);
        }
    }
}
