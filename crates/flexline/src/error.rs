//! Error types for the flexline engine.
//!
//! Only the mutation surface can fail; layout itself clamps pathological
//! inputs to finite values and has no error path.

use thiserror::Error;

/// Result type alias for flexline operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised synchronously by the mutation surface. The node is left
/// unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A numeric style input was NaN/infinite, or negative where a
    /// non-negative number is required.
    #[error("invalid value for {property}: {reason}")]
    InvalidValue {
        property: &'static str,
        reason: &'static str,
    },

    /// `set`/`style` was called with a key outside the recognised set.
    #[error("unknown style property: {key}")]
    UnknownProperty { key: String },

    /// A tree mutation would create a cycle or otherwise corrupt the tree.
    #[error("tree misuse: {reason}")]
    TreeMisuse { reason: &'static str },
}
