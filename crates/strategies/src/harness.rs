//! Comparison harness: times every strategy against the same source graph.
//!
//! This is a reporting utility, not a test. Durations depend on the machine
//! and carry no pass/fail meaning. Round-trip strategies are timed including
//! their intermediate buffer/text allocation.

use std::hint::black_box;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use deepcopy_core::CopyResult;
use deepcopy_people::User;

use crate::strategy::CopyStrategy;

/// Iteration count used when nothing else is configured.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Wall-clock cost of one strategy over the configured iterations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyTiming {
    pub strategy: CopyStrategy,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl StrategyTiming {
    /// Mean duration of a single copy (zero when nothing ran).
    pub fn per_copy(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        let nanos = self.elapsed.as_nanos() / u128::from(self.iterations);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

/// Outcome of one [`ComparisonHarness::run`].
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub iterations: u64,
    pub recorded_at: DateTime<Utc>,
    pub timings: Vec<StrategyTiming>,
}

impl ComparisonReport {
    pub fn timing(&self, strategy: CopyStrategy) -> Option<&StrategyTiming> {
        self.timings.iter().find(|t| t.strategy == strategy)
    }

    /// Strategy with the smallest total elapsed time.
    pub fn fastest(&self) -> Option<&StrategyTiming> {
        self.timings.iter().min_by_key(|t| t.elapsed)
    }
}

impl core::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "deep copy of one User, {} iterations per strategy", self.iterations)?;
        for timing in &self.timings {
            writeln!(
                f,
                "  {:<32} {:>10} ms  ({} ns/copy)",
                timing.strategy.label(),
                timing.elapsed.as_millis(),
                timing.per_copy().as_nanos(),
            )?;
        }
        Ok(())
    }
}

/// Drives each strategy `iterations` times over a single source `User`.
#[derive(Debug, Clone)]
pub struct ComparisonHarness {
    source: User,
    iterations: u64,
    strategies: Vec<CopyStrategy>,
}

impl ComparisonHarness {
    pub fn new(source: User, iterations: u64) -> Self {
        Self {
            source,
            iterations,
            strategies: CopyStrategy::ALL.to_vec(),
        }
    }

    /// Restrict (and order) the strategies to time.
    pub fn with_strategies(mut self, strategies: Vec<CopyStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn source(&self) -> &User {
        &self.source
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn strategies(&self) -> &[CopyStrategy] {
        &self.strategies
    }

    /// Time every configured strategy in order.
    ///
    /// The first copy error aborts the run and is returned as-is.
    pub fn run(&self) -> CopyResult<ComparisonReport> {
        let recorded_at = Utc::now();
        let timings = self
            .strategies
            .iter()
            .map(|&strategy| self.time(strategy))
            .collect::<CopyResult<Vec<_>>>()?;

        Ok(ComparisonReport {
            iterations: self.iterations,
            recorded_at,
            timings,
        })
    }

    fn time(&self, strategy: CopyStrategy) -> CopyResult<StrategyTiming> {
        let provider = strategy.provider();
        tracing::debug!(strategy = strategy.name(), iterations = self.iterations, "timing strategy");

        let start = Instant::now();
        for _ in 0..self.iterations {
            black_box(provider.copy(black_box(&self.source))?);
        }
        let elapsed = start.elapsed();

        tracing::info!(
            strategy = strategy.name(),
            iterations = self.iterations,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "strategy timed"
        );

        Ok(StrategyTiming {
            strategy,
            iterations: self.iterations,
            elapsed,
        })
    }
}
