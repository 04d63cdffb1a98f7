//! Benchmarking entry point: configuration and the run itself.
//!
//! Kept apart from the test suite; timings here are observations only.

pub mod config;

use deepcopy_people::{Address, User};
use deepcopy_strategies::{ComparisonHarness, ComparisonReport};

pub use config::ShootoutConfig;

/// The graph every strategy copies.
pub fn prime_minister() -> User {
    User::new(
        "Prime",
        "Minister",
        Address::new("Downing St 10", "London", "England"),
    )
}

/// Time the configured strategies over [`prime_minister`].
pub fn run(config: &ShootoutConfig) -> anyhow::Result<ComparisonReport> {
    let harness = ComparisonHarness::new(prime_minister(), config.iterations)
        .with_strategies(config.strategies.clone());
    let report = harness.run()?;
    Ok(report)
}
