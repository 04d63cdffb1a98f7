//! People domain module: the `User` / `Address` object graph.
//!
//! Plain data holders, representable by every copy mechanism the workspace
//! compares (copy constructor, clone capability, serde codecs, facet codecs).

pub mod address;
pub mod user;

pub use address::Address;
pub use user::User;
