pub mod kind;
pub mod sequence;

pub use kind::ElementKind;
pub use sequence::Sequence;
