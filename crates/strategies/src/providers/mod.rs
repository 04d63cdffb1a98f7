//! The five copy providers.
//!
//! - `copy_constructor` / `clone_capability`: hand-written duplication.
//! - `binary`: postcard round-trip.
//! - `json_serde` / `json_facet`: JSON text round-trip through two unrelated
//!   encoders (serde data binding vs facet reflection).

pub mod binary;
pub mod clone_capability;
pub mod copy_constructor;
pub mod json_facet;
pub mod json_serde;

pub use binary::BinaryRoundTrip;
pub use clone_capability::CloneCapability;
pub use copy_constructor::CopyConstructor;
pub use json_facet::FacetJsonRoundTrip;
pub use json_serde::SerdeJsonRoundTrip;
