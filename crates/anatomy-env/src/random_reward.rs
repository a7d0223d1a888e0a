//! Finite-horizon environment paying random rewards

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use anatomy_core::{
    DiscreteAction, Environment, EnvironmentConfig, RLError, Result, Reward, VectorObservation,
};

/// Environment that pays a uniform random reward in `[0, 1)` for each of a
/// fixed number of steps, whatever action the agent picks.
///
/// Its only state is the count of steps left. The observation is always a
/// zero vector, and the action set never changes over the episode.
#[derive(Debug, Clone)]
pub struct RandomRewardEnv<R = StdRng> {
    /// Steps left before the episode is done
    steps_left: usize,
    /// Size of the legal action set
    num_actions: usize,
    /// Observation vector length
    observation_dim: usize,
    /// Reward source
    rng: R,
}

impl RandomRewardEnv<StdRng> {
    /// Create a new environment, seeded from `config.seed` or OS entropy
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RandomRewardEnv<R> {
    /// Create a new environment drawing rewards from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn with_rng(config: EnvironmentConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            steps_left: config.max_steps,
            num_actions: config.num_actions,
            observation_dim: config.observation_dim,
            rng,
        })
    }

    /// Steps left before the episode is done
    pub fn steps_left(&self) -> usize {
        self.steps_left
    }
}

impl<R: Rng> Environment for RandomRewardEnv<R> {
    type Observation = VectorObservation;
    type Action = DiscreteAction;

    fn observation(&self) -> VectorObservation {
        VectorObservation::zeros(self.observation_dim)
    }

    fn actions(&self) -> Vec<DiscreteAction> {
        DiscreteAction::range(self.num_actions)
    }

    fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    fn action(&mut self, _action: DiscreteAction) -> Result<Reward> {
        if self.is_done() {
            warn!("action submitted after the episode ended");
            return Err(RLError::EpisodeAlreadyEnded);
        }
        self.steps_left -= 1;

        let reward = Reward(self.rng.gen::<f64>());
        debug!(steps_left = self.steps_left, reward = reward.value(), "resolved action");
        Ok(reward)
    }
}
