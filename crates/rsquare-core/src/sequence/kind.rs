//! Element Kind Tag
//!
//! Runtime discriminant describing what a dynamically-typed sequence holds.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Element kind of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Absent handle
    Null,

    /// Boolean elements
    Logical,

    /// 32-bit signed integers
    Integer,

    /// 64-bit IEEE 754 floats
    Float,

    /// UTF-8 strings
    Text,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Null,
        ElementKind::Logical,
        ElementKind::Integer,
        ElementKind::Float,
        ElementKind::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Null => "null",
            ElementKind::Logical => "logical",
            ElementKind::Integer => "integer",
            ElementKind::Float => "float",
            ElementKind::Text => "text",
        }
    }

    /// True for the kinds the square operation accepts.
    pub fn is_numeric(self) -> bool {
        matches!(self, ElementKind::Integer | ElementKind::Float)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" => Ok(ElementKind::Null),
            "logical" | "bool" => Ok(ElementKind::Logical),
            "integer" | "int" => Ok(ElementKind::Integer),
            "float" | "double" | "real" => Ok(ElementKind::Float),
            "text" | "string" => Ok(ElementKind::Text),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
