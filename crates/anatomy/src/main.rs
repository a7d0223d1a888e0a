//! Anatomy of an agent: one episode of a random agent against a random-reward
//! environment.

use anatomy_agent::RandomAgent;
use anatomy_core::{run_episode, EnvironmentConfig};
use anatomy_env::RandomRewardEnv;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut env = RandomRewardEnv::new(EnvironmentConfig::default())
        .context("failed to create environment")?;
    let mut agent = RandomAgent::new();

    let summary = run_episode(&mut env, &mut agent).context("episode failed")?;

    println!("Total reward got: {:.4}", summary.total_reward);
    Ok(())
}
