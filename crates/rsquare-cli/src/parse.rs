//! Argument parsing into a typed sequence

use rsquare_core::{ElementKind, Sequence};

use crate::error::{CliError, CliResult};

/// Build a sequence of `kind` from raw command-line values.
pub(crate) fn parse_sequence(kind: ElementKind, raw: &[String]) -> CliResult<Sequence> {
    match kind {
        ElementKind::Null => Ok(Sequence::Null),
        ElementKind::Logical => parse_all(kind, raw, parse_logical).map(Sequence::Logical),
        ElementKind::Integer => {
            parse_all(kind, raw, |s| s.parse::<i32>().ok()).map(Sequence::Integer)
        }
        ElementKind::Float => {
            parse_all(kind, raw, |s| s.parse::<f64>().ok()).map(Sequence::Float)
        }
        ElementKind::Text => Ok(Sequence::Text(raw.to_vec())),
    }
}

fn parse_all<T>(
    kind: ElementKind,
    raw: &[String],
    parse: impl Fn(&str) -> Option<T>,
) -> CliResult<Vec<T>> {
    raw.iter()
        .map(|s| {
            parse(s.trim()).ok_or_else(|| CliError::InvalidValue {
                kind,
                value: s.clone(),
            })
        })
        .collect()
}

fn parse_logical(s: &str) -> Option<bool> {
    match s {
        "true" | "TRUE" | "T" => Some(true),
        "false" | "FALSE" | "F" => Some(false),
        _ => None,
    }
}
