//! Error types for the agent/environment loop

use thiserror::Error;

/// Core error type for agent and environment operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RLError {
    /// An action was submitted to an environment whose episode is over
    #[error("Game is over: episode already ended")]
    EpisodeAlreadyEnded,

    /// The environment offered no action to choose from
    #[error("No legal actions available")]
    NoLegalActions,

    /// Environment configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for agent and environment operations
pub type Result<T> = std::result::Result<T, RLError>;
