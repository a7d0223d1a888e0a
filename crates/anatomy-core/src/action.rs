//! Action representations

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for actions an agent can submit to an environment
pub trait Action: Clone + Debug {
    /// Convert action to a vector representation
    fn to_vec(&self) -> Vec<f64>;
}

/// Discrete action identified by a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscreteAction(pub usize);

impl DiscreteAction {
    /// Enumerate the actions `0..n`
    pub fn range(n: usize) -> Vec<Self> {
        (0..n).map(Self).collect()
    }
}

impl Action for DiscreteAction {
    #[allow(clippy::cast_precision_loss)]
    fn to_vec(&self) -> Vec<f64> {
        vec![self.0 as f64]
    }
}

impl From<usize> for DiscreteAction {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for DiscreteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
