//! Clone capability: explicit, per-type deep duplication.

use crate::error::{CopyError, CopyResult};

/// Polymorphic self-duplication producing a graph that shares no mutable
/// state with `self`.
///
/// A type declares the capability by overriding [`DeepClone::deep_clone`].
/// The provided body never falls back to a shallow copy; it reports
/// [`CopyError::CloneUnsupported`] instead.
///
/// Implementations must allocate every owned nested entity afresh rather
/// than handing out a reference (or a cheap handle) to the source's.
pub trait DeepClone: Sized {
    fn deep_clone(&self) -> CopyResult<Self> {
        Err(CopyError::clone_unsupported::<Self>())
    }
}
