//! Environment-driven configuration for the shootout binary.
//!
//! | variable | default |
//! |---|---|
//! | `DEEPCOPY_ITERATIONS` | `1000000` |
//! | `DEEPCOPY_STRATEGIES` | every strategy |
//! | `DEEPCOPY_REPORT_JSON` | `false` |

use deepcopy_core::CopyResult;
use deepcopy_strategies::CopyStrategy;
use deepcopy_strategies::harness::DEFAULT_ITERATIONS;

pub const ITERATIONS_VAR: &str = "DEEPCOPY_ITERATIONS";
pub const STRATEGIES_VAR: &str = "DEEPCOPY_STRATEGIES";
pub const REPORT_JSON_VAR: &str = "DEEPCOPY_REPORT_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShootoutConfig {
    pub iterations: u64,
    pub strategies: Vec<CopyStrategy>,
    pub report_json: bool,
}

impl Default for ShootoutConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            strategies: CopyStrategy::ALL.to_vec(),
            report_json: false,
        }
    }
}

impl ShootoutConfig {
    pub fn from_env() -> CopyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Malformed numbers and flags fall back to their defaults with a
    /// warning. An unknown strategy name is an error.
    pub fn from_lookup<F>(lookup: F) -> CopyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let iterations = match lookup(ITERATIONS_VAR) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "{ITERATIONS_VAR} is not a number; using default");
                defaults.iterations
            }),
            None => defaults.iterations,
        };

        let strategies = match lookup(STRATEGIES_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_strategies(&raw)?,
            _ => defaults.strategies,
        };

        let report_json = match lookup(REPORT_JSON_VAR) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "{REPORT_JSON_VAR} is not a boolean; using default");
                defaults.report_json
            }),
            None => defaults.report_json,
        };

        Ok(Self {
            iterations,
            strategies,
            report_json,
        })
    }
}

fn parse_strategies(raw: &str) -> CopyResult<Vec<CopyStrategy>> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse::<CopyStrategy>)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
