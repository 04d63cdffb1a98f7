//! Value object trait: equality by field value, not identity.
//!
//! Every entity in a copyable graph is a value object: two instances holding
//! the same field values are equal, even though they live in different
//! allocations. That is exactly what a deep copy must produce.

/// Marker trait for value objects taking part in a copy graph.
///
/// ## Equality vs identity
///
/// - **Equality** (`PartialEq`): field-for-field comparison. A fresh copy is
///   equal to its source.
/// - **Identity**: the allocation itself. A fresh copy never shares an
///   allocation with its source; tests observe this through the heap buffers
///   of owned strings (`str::as_ptr`).
///
/// ## Ownership
///
/// Value objects own their nested entities by value. There is no shared
/// handle (`Rc`, `Arc`, `&`) inside a value object, so mutating one instance
/// can never be observed through another.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Address {
///     street: String,
///     city: String,
///     country: String,
/// }
///
/// impl ValueObject for Address {}
///
/// let a = Address { street: "Main".into(), city: "Oslo".into(), country: "Norway".into() };
/// let b = a.clone();
/// assert_eq!(a, b);                            // equal by value
/// assert_ne!(a.street.as_ptr(), b.street.as_ptr()); // distinct allocations
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
