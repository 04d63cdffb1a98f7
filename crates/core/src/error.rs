//! Copy error model.

use thiserror::Error;

/// Result type used by every copy strategy.
pub type CopyResult<T> = Result<T, CopyError>;

/// Failure of a deep-copy operation.
///
/// A failed copy never yields a partial graph: the caller either gets a fully
/// independent copy or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The binary mechanism could not represent (or restore) the graph.
    #[error("binary serialization failed: {0}")]
    Serialization(String),

    /// A text encoder could not render the graph.
    #[error("{encoder} encoding failed: {reason}")]
    Encoding {
        encoder: &'static str,
        reason: String,
    },

    /// Text was malformed or did not match the expected shape.
    #[error("{encoder} decoding failed: {reason}")]
    Decoding {
        encoder: &'static str,
        reason: String,
    },

    /// The type never declared the clone capability.
    #[error("clone not supported by {type_name}")]
    CloneUnsupported { type_name: &'static str },

    /// A strategy name did not match any known strategy.
    #[error("unknown copy strategy: {0}")]
    UnknownStrategy(String),
}

impl CopyError {
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    pub fn encoding(encoder: &'static str, reason: impl Into<String>) -> Self {
        Self::Encoding {
            encoder,
            reason: reason.into(),
        }
    }

    pub fn decoding(encoder: &'static str, reason: impl Into<String>) -> Self {
        Self::Decoding {
            encoder,
            reason: reason.into(),
        }
    }

    pub fn clone_unsupported<T: ?Sized>() -> Self {
        Self::CloneUnsupported {
            type_name: core::any::type_name::<T>(),
        }
    }

    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy(name.into())
    }
}
