//! Error types for union narrowing, dispatch, and wire codec operations.

use thiserror::Error;

/// Errors that can occur when narrowing, dispatching over, or (de)serializing
/// a union value.
///
/// The set is closed and arity-independent: callers catch the same four kinds
/// whether they work with a [`Union2`](crate::Union2) or a
/// [`Union8`](crate::Union8).
#[derive(Error, Debug)]
pub enum UnionError {
    /// A guarded narrowing accessor could not safely produce the requested
    /// variant. `tag` is the discriminator at the time of the failure
    /// (0 = uninitialized).
    #[error("invalid union state (tag {tag}): {message}")]
    InvalidState { tag: u8, message: String },

    /// A runtime type assertion failed: `get::<T>()` was called with a `T`
    /// that does not match the active variant, or `from_any` found no
    /// declared variant type accepting the input.
    #[error("invalid cast: requested {requested}, found {actual}")]
    InvalidCast { requested: String, actual: String },

    /// Total dispatch (`match_with`) was attempted on an uninitialized union.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The string-level codec entry points failed to read or write JSON.
    /// Wire-format violations (bad discriminator, malformed envelope) end up
    /// here when going through [`from_json`](crate::from_json).
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UnionError {
    /// True for the `InvalidState` kind; convenient in tests and in callers
    /// that only want to distinguish guard failures from cast failures.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, UnionError::InvalidState { .. })
    }

    /// True for the `InvalidCast` kind.
    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, UnionError::InvalidCast { .. })
    }

    /// True for the `InvalidOperation` kind.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, UnionError::InvalidOperation(_))
    }
}

/// Convenience alias used throughout union-core.
pub type Result<T> = std::result::Result<T, UnionError>;
