//! rsquare - Core Library
//!
//! Element-wise in-place square over dynamically-typed numeric sequences.

pub mod error;
pub mod sequence;
pub mod square;
pub mod dispatch;

// Re-export commonly used types
pub use error::{ParseKindError, SquareError, SquareResult};
pub use sequence::{ElementKind, Sequence};
pub use square::{square_in_place, Squarable};
pub use dispatch::square;
