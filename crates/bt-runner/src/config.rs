//! Runner configuration structures and loaders.
use std::time::Duration;

use behavior_tree::TreeConfig;
use behavior_tree::config::read_env;

/// Configuration for the reference host loop.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Milliseconds between pulses.
    pub interval_ms: u64,
    /// Stop after this many pulses. `None` runs until interrupted.
    pub max_pulses: Option<u64>,
    pub tree: TreeConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 250,
            max_pulses: None,
            tree: TreeConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_TICK_INTERVAL_MS` - Pulse cadence in milliseconds (default: 250)
    /// - `BT_MAX_PULSES` - Pulse budget (default: unbounded)
    /// - `BT_MAX_RUN_STEPS`, `BT_RNG_SEED` - See [`TreeConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            tree: TreeConfig::from_env(),
            ..Self::default()
        };

        if let Some(interval) = read_env::<u64>("BT_TICK_INTERVAL_MS") {
            config.interval_ms = interval.max(1);
        }

        config.max_pulses = read_env::<u64>("BT_MAX_PULSES");

        config
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
