//! `deepcopy-core` — deep-copy contract building blocks.
//!
//! This crate contains the **pure** primitives every copy strategy shares
//! (no codecs, no timing).

pub mod deep_clone;
pub mod error;
pub mod value_object;

pub use deep_clone::DeepClone;
pub use error::{CopyError, CopyResult};
pub use value_object::ValueObject;
