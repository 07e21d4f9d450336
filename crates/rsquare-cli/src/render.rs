//! Output rendering

use std::fmt::Display;

use rsquare_core::Sequence;
use serde_json::{json, Number, Value};

use crate::config::OutputFormat;
use crate::error::CliResult;

pub(crate) fn render(seq: &Sequence, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(seq)),
        OutputFormat::Json => render_json(seq),
    }
}

fn render_plain(seq: &Sequence) -> String {
    match seq {
        Sequence::Null => String::new(),
        Sequence::Logical(v) => join(v),
        Sequence::Integer(v) => join(v),
        Sequence::Float(v) => join(v),
        Sequence::Text(v) => join(v),
    }
}

// JSON has no inf/NaN; serde_json would turn them into null.
fn render_json(seq: &Sequence) -> CliResult<String> {
    match seq {
        Sequence::Float(v) if v.iter().any(|x| !x.is_finite()) => {
            let values: Vec<Value> = v.iter().map(|&x| float_value(x)).collect();
            Ok(serde_json::to_string(&json!({ "kind": seq.kind().name(), "values": values }))?)
        }
        _ => Ok(serde_json::to_string(seq)?),
    }
}

fn float_value(x: f64) -> Value {
    Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(x.to_string()))
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
