//! `deepcopy-strategies` — interchangeable deep-copy providers and the
//! harness that times them against each other.
//!
//! Every provider takes a `&User` and hands back a new, fully independent
//! `User`. How it gets there (hand-written copy, clone capability, binary or
//! JSON round-trip) is the only thing that differs.

pub mod harness;
pub mod providers;
pub mod strategy;

pub use harness::{ComparisonHarness, ComparisonReport, StrategyTiming};
pub use providers::{
    BinaryRoundTrip, CloneCapability, CopyConstructor, FacetJsonRoundTrip, SerdeJsonRoundTrip,
};
pub use strategy::{CopyProvider, CopyStrategy};
