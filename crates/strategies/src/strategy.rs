//! Strategy registry: names, dispatch, and the provider trait.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use deepcopy_core::{CopyError, CopyResult};
use deepcopy_people::User;

use crate::providers::{
    BinaryRoundTrip, CloneCapability, CopyConstructor, FacetJsonRoundTrip, SerdeJsonRoundTrip,
};

/// A way of producing an independent copy of a [`User`].
///
/// Implementations must return a graph that shares no mutable state with
/// `source`, or an error. They never return a partially built copy.
pub trait CopyProvider {
    /// Which registered strategy this provider implements.
    fn strategy(&self) -> CopyStrategy;

    fn copy(&self, source: &User) -> CopyResult<User>;
}

/// The deep-copy strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyStrategy {
    CopyConstructor,
    CloneCapability,
    BinaryRoundTrip,
    SerdeJsonRoundTrip,
    FacetJsonRoundTrip,
}

impl CopyStrategy {
    /// Every strategy, in report order.
    pub const ALL: [CopyStrategy; 5] = [
        CopyStrategy::CopyConstructor,
        CopyStrategy::CloneCapability,
        CopyStrategy::BinaryRoundTrip,
        CopyStrategy::SerdeJsonRoundTrip,
        CopyStrategy::FacetJsonRoundTrip,
    ];

    /// Stable identifier used in logs, benchmark ids and configuration.
    pub fn name(self) -> &'static str {
        match self {
            CopyStrategy::CopyConstructor => "copy-constructor",
            CopyStrategy::CloneCapability => "clone-capability",
            CopyStrategy::BinaryRoundTrip => "binary-round-trip",
            CopyStrategy::SerdeJsonRoundTrip => "serde-json-round-trip",
            CopyStrategy::FacetJsonRoundTrip => "facet-json-round-trip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyStrategy::CopyConstructor => "copy constructor",
            CopyStrategy::CloneCapability => "clone capability (DeepClone)",
            CopyStrategy::BinaryRoundTrip => "binary round-trip (postcard)",
            CopyStrategy::SerdeJsonRoundTrip => "JSON round-trip (serde_json)",
            CopyStrategy::FacetJsonRoundTrip => "JSON round-trip (facet-json)",
        }
    }

    pub fn provider(self) -> &'static dyn CopyProvider {
        match self {
            CopyStrategy::CopyConstructor => &CopyConstructor,
            CopyStrategy::CloneCapability => &CloneCapability,
            CopyStrategy::BinaryRoundTrip => &BinaryRoundTrip,
            CopyStrategy::SerdeJsonRoundTrip => &SerdeJsonRoundTrip,
            CopyStrategy::FacetJsonRoundTrip => &FacetJsonRoundTrip,
        }
    }

    pub fn copy(self, source: &User) -> CopyResult<User> {
        self.provider().copy(source)
    }
}

impl core::fmt::Display for CopyStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CopyStrategy {
    type Err = CopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CopyStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CopyError::unknown_strategy(wanted))
    }
}
