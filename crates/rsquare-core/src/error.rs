//! rsquare Error Types
//!
//! Defines the error conditions produced by the square dispatch.
//! Errors are raised synchronously and never leave a partial result behind.

use thiserror::Error;

use crate::sequence::ElementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareError {
    /// The sequence's element kind is neither integer nor float.
    #[error("unsupported element type: {0} (expected integer or float)")]
    UnsupportedType(ElementKind),
}

/// Unrecognised element kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element kind: {0}")]
pub struct ParseKindError(pub String);

pub type SquareResult<T> = Result<T, SquareError>;
