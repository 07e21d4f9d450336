//! Dynamically-Typed Sequence
//!
//! A caller-owned, fixed-length buffer whose element kind is only known at
//! runtime. The variant is the type tag.

use serde::Serialize;

use super::kind::ElementKind;

/// Sequence handle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Sequence {
    Null,
    Logical(Vec<bool>),
    Integer(Vec<i32>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Sequence {
    /// Runtime element kind tag
    pub fn kind(&self) -> ElementKind {
        match self {
            Sequence::Null => ElementKind::Null,
            Sequence::Logical(_) => ElementKind::Logical,
            Sequence::Integer(_) => ElementKind::Integer,
            Sequence::Float(_) => ElementKind::Float,
            Sequence::Text(_) => ElementKind::Text,
        }
    }

    /// Number of elements; a null handle has none.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Null => 0,
            Sequence::Logical(v) => v.len(),
            Sequence::Integer(v) => v.len(),
            Sequence::Float(v) => v.len(),
            Sequence::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_integers(&self) -> Option<&[i32]> {
        match self {
            Sequence::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Sequence::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<bool>> for Sequence {
    fn from(values: Vec<bool>) -> Self {
        Sequence::Logical(values)
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Sequence::Integer(values)
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Sequence::Float(values)
    }
}

impl From<Vec<String>> for Sequence {
    fn from(values: Vec<String>) -> Self {
        Sequence::Text(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Sequence::Null.kind(), ElementKind::Null);
        assert_eq!(Sequence::from(vec![true]).kind(), ElementKind::Logical);
        assert_eq!(Sequence::from(vec![1i32]).kind(), ElementKind::Integer);
        assert_eq!(Sequence::from(vec![1.0f64]).kind(), ElementKind::Float);
        assert_eq!(
            Sequence::from(vec!["a".to_string()]).kind(),
            ElementKind::Text
        );
    }

    #[test]
    fn null_is_empty() {
        assert_eq!(Sequence::Null.len(), 0);
        assert!(Sequence::Null.is_empty());
    }

    #[test]
    fn typed_accessors() {
        let ints = Sequence::from(vec![1, 2, 3]);
        assert_eq!(ints.as_integers(), Some(&[1, 2, 3][..]));
        assert_eq!(ints.as_floats(), None);

        let floats = Sequence::from(vec![0.5]);
        assert_eq!(floats.as_floats(), Some(&[0.5][..]));
        assert_eq!(floats.as_integers(), None);
    }
}
