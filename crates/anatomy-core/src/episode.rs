//! Episode driver

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::{Agent, Environment, Reward};

/// Outcome of one episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Number of successful agent steps
    pub steps: usize,
    /// Reward the agent holds once the environment is done
    pub total_reward: Reward,
}

/// Step `agent` against `env` until the environment reports done.
///
/// The loop checks [`Environment::is_done`] before every step, so an
/// environment that starts done yields zero steps.
pub fn run_episode<E, A>(env: &mut E, agent: &mut A) -> crate::Result<EpisodeSummary>
where
    E: Environment,
    A: Agent<E>,
{
    let span = info_span!("episode");
    let _guard = span.enter();

    let mut steps = 0;
    while !env.is_done() {
        let reward = agent.step(env)?;
        steps += 1;
        debug!(step = steps, reward = reward.value(), "agent step");
    }

    let summary = EpisodeSummary {
        steps,
        total_reward: agent.total_reward(),
    };
    info!(
        steps = summary.steps,
        total_reward = summary.total_reward.value(),
        "episode finished"
    );
    Ok(summary)
}
