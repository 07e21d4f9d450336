//! CLI Configuration
//!
//! Command-line options for a single square invocation.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use rsquare_core::ElementKind;
use rsquare_export::SQUARE_EXPORT;
use tracing::Level;

use crate::error::CliResult;

/// Element kind accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
    /// Absent handle; values are ignored
    Null,
    /// true/false, TRUE/FALSE, T/F
    #[value(alias = "bool")]
    Logical,
    /// 32-bit signed integers
    #[value(alias = "int")]
    Integer,
    /// 64-bit floats
    #[value(aliases = ["double", "real"])]
    Float,
    /// Strings
    #[value(alias = "string")]
    Text,
}

impl From<KindArg> for ElementKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Null => ElementKind::Null,
            KindArg::Logical => ElementKind::Logical,
            KindArg::Integer => ElementKind::Integer,
            KindArg::Float => ElementKind::Float,
            KindArg::Text => ElementKind::Text,
        }
    }
}

/// Output encoding for the squared sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Space-separated elements
    Plain,
    /// `{"kind": ..., "values": [...]}`; non-finite floats as "inf"/"-inf"/"NaN"
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "rsquare")]
#[command(about = "Square each element of a sequence in place")]
#[command(version)]
pub(crate) struct CliConfig {
    /// Element kind the values are parsed as
    #[arg(short, long, value_enum, default_value_t = KindArg::Integer)]
    pub kind: KindArg,

    /// Exported function to call
    #[arg(short, long, default_value = SQUARE_EXPORT)]
    pub export: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log dispatch decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Sequence elements
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            kind: KindArg::Integer,
            export: SQUARE_EXPORT.to_string(),
            format: OutputFormat::Plain,
            verbose: false,
            values: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Parse `args`, reporting bad flags as a usage error.
    pub fn from_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    pub fn element_kind(&self) -> ElementKind {
        self.kind.into()
    }

    /// Maximum tracing level for the subscriber
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
