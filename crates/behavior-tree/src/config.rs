//! Tree configuration structures and loaders.
use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Knobs applied by [`Builder`](crate::Builder) to the tree it produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Upper bound on steps taken by a single [`run`](crate::BehaviorTree::run).
    pub max_run_steps: Option<usize>,
    /// Seed for random nodes. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl TreeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_MAX_RUN_STEPS` - Step cap for `run()` (default: unbounded)
    /// - `BT_RNG_SEED` - Seed for random selectors and success rates (default: entropy)
    pub fn from_env() -> Self {
        Self {
            max_run_steps: read_env::<usize>("BT_MAX_RUN_STEPS").map(|steps| steps.max(1)),
            seed: read_env::<u64>("BT_RNG_SEED"),
        }
    }

    /// Sets a fixed seed for random nodes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of steps a single `run()` may take.
    pub fn with_max_run_steps(mut self, steps: usize) -> Self {
        self.max_run_steps = Some(steps.max(1));
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parses an environment variable, treating absent or malformed values as unset.
pub fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
