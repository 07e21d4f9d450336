//! Type-Tag Dispatch
//!
//! Inspects a sequence's element kind and forwards to the generic square.
//! Unsupported kinds are rejected before any element is touched.

use tracing::{debug, warn};

use crate::error::{SquareError, SquareResult};
use crate::sequence::Sequence;
use crate::square::square_in_place;

/// Square every element of `seq` in place and return the same handle.
pub fn square(seq: &mut Sequence) -> SquareResult<&mut Sequence> {
    let kind = seq.kind();
    match seq {
        Sequence::Integer(values) => {
            square_in_place(values);
        }
        Sequence::Float(values) => {
            square_in_place(values);
        }
        Sequence::Null | Sequence::Logical(_) | Sequence::Text(_) => {
            warn!(%kind, "rejecting unsupported element type");
            return Err(SquareError::UnsupportedType(kind));
        }
    }
    debug!(%kind, len = seq.len(), "squared sequence in place");
    Ok(seq)
}
