//! Error types for rsquare-cli

use std::process::ExitCode;

use rsquare_core::{ElementKind, SquareError};
use rsquare_export::ExportError;
use thiserror::Error;

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Bad flag, missing flag value, or help/version request
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Argument could not be parsed as the requested kind
    #[error("invalid {kind} value: '{value}'")]
    InvalidValue { kind: ElementKind, value: String },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::Usage(e) if !e.use_stderr() => 0,
            Self::Usage(_) => 5,
            Self::InvalidValue { .. } => 2,
            Self::Export(ExportError::Core(SquareError::UnsupportedType(_))) => 3,
            Self::Export(ExportError::UnknownExport(_)) => 4,
            Self::Json(_) => 1,
        }
    }

    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn bad_flag_and_bad_value_exit_differently() {
        let usage = CliConfig::from_args(["rsquare", "--bogus"]).unwrap_err();
        assert!(matches!(usage, CliError::Usage(_)));
        assert_eq!(usage.exit_status(), 5);

        let value = CliError::InvalidValue {
            kind: ElementKind::Integer,
            value: "x".to_string(),
        };
        assert_ne!(usage.exit_status(), value.exit_status());
    }

    #[test]
    fn help_and_version_exit_cleanly() {
        let help = CliConfig::from_args(["rsquare", "--help"]).unwrap_err();
        assert_eq!(help.exit_status(), 0);
        let version = CliConfig::from_args(["rsquare", "--version"]).unwrap_err();
        assert_eq!(version.exit_status(), 0);
    }
}
