//! Error types for streamcell-core

use thiserror::Error;

use crate::kind::CellKind;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by cell accessors
///
/// Every error is local to the accessor call that produced it; no accessor
/// mutates the cell on failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The raw type tag is outside the known vocabulary
    #[error("Unsupported cell type '{0}'")]
    UnsupportedCellType(String),

    /// The operation exists only for shape compatibility and is not supported
    #[error("Operation not supported: {0}")]
    UnsupportedOperation(&'static str),

    /// The operation does not apply to the cell's current state
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// A typed accessor was called on a cell of an incompatible kind
    #[error("Cannot get a {expected} value from a {actual} cell")]
    TypeMismatch {
        expected: CellKind,
        actual: CellKind,
    },

    /// The raw payload is not a valid number
    #[error("Not a number: '{0}'")]
    MalformedNumeric(String),
}

impl Error {
    /// Create a type-mismatch error
    pub fn type_mismatch(expected: CellKind, actual: CellKind) -> Self {
        Error::TypeMismatch { expected, actual }
    }

    /// Check if this error comes from an unsupported operation
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }
}
