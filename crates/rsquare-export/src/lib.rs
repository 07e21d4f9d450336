//! Export crate: the entry points a host environment calls into
//!
//! A host hands over a dynamically-typed sequence and the name of an
//! exported function. This crate looks the name up and forwards the handle.
//! It holds no numeric logic of its own.

pub use rsquare_core::{Sequence, SquareError, SquareResult};

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Name under which the square operation is exported.
pub const SQUARE_EXPORT: &str = "square";

/// Exported function. Mutates the caller's sequence in place and hands the
/// same handle back.
pub type ExportFn = for<'a> fn(&'a mut Sequence) -> SquareResult<&'a mut Sequence>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("unknown export: {0}")]
    UnknownExport(String),

    #[error(transparent)]
    Core(#[from] SquareError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Thin wrapper exported as `square`.
pub fn square_export(seq: &mut Sequence) -> SquareResult<&mut Sequence> {
    rsquare_core::square(seq)
}

/// Table of exported functions keyed by name.
#[derive(Clone, Default)]
pub struct Exports {
    table: BTreeMap<String, ExportFn>,
}

impl fmt::Debug for Exports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exports")
            .field("names", &self.names())
            .finish()
    }
}

impl Exports {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in `square` export registered.
    pub fn with_defaults() -> Self {
        let mut exports = Self::new();
        exports.register(SQUARE_EXPORT, square_export);
        exports
    }

    /// Register `f` under `name`, returning any function it replaced.
    pub fn register(&mut self, name: impl Into<String>, f: ExportFn) -> Option<ExportFn> {
        self.table.insert(name.into(), f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Exported names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    /// Invoke the export `name` on `seq` and return the same handle.
    pub fn call<'a>(&self, name: &str, seq: &'a mut Sequence) -> ExportResult<&'a mut Sequence> {
        let f = self
            .table
            .get(name)
            .ok_or_else(|| ExportError::UnknownExport(name.to_string()))?;
        debug!(export = name, kind = %seq.kind(), len = seq.len(), "calling export");
        Ok(f(seq)?)
    }
}
