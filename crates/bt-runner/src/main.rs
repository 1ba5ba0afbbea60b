//! Reference runner binary.
//!
//! Drives the demo patrol tree until interrupted or the pulse budget runs
//! out.
//!
//! ```bash
//! BT_TICK_INTERVAL_MS=100 BT_MAX_PULSES=50 RUST_LOG=debug cargo run -p bt-runner
//! ```

use anyhow::Result;
use bt_runner::{Patrol, RunnerConfig, Scheduler, patrol_tree};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunnerConfig::from_env();
    info!(
        interval_ms = config.interval_ms,
        max_pulses = ?config.max_pulses,
        seed = ?config.tree.seed,
        "starting runner"
    );

    let tree = patrol_tree(config.tree.clone())?;
    let mut scheduler = Scheduler::new(tree, Patrol::new());
    scheduler.start();

    tokio::select! {
        attempts = scheduler.drive(config.interval(), config.max_pulses) => {
            info!(attempts, "pulse budget exhausted");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupted");
        }
    }

    scheduler.stop();
    let patrol = scheduler.context();
    info!(
        position = patrol.position,
        legs = patrol.legs(),
        stamina = patrol.stamina,
        "runner finished"
    );

    Ok(())
}
