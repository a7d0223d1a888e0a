//! Agents for the agent anatomy loop
//!
//! Only a uniform-random baseline is provided; it never learns.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod random;

// Re-export agents
pub use random::RandomAgent;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::RandomAgent;
    pub use anatomy_core::prelude::*;
}
