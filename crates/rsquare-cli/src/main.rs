//! rsquare - CLI
//!
//! Parses a sequence from the command line, squares it through the export
//! table and prints the result.

mod config;
mod error;
mod parse;
mod render;

use std::process::ExitCode;

use rsquare_export::Exports;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::parse::parse_sequence;
use crate::render::render;

fn main() -> ExitCode {
    let config = match CliConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            match &e {
                // clap routes help/version to stdout and usage errors to stderr
                CliError::Usage(usage) => {
                    let _ = usage.print();
                }
                _ => eprintln!("Error: {}", e),
            }
            return e.exit_code();
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(config: &CliConfig) -> CliResult<String> {
    let mut seq = parse_sequence(config.element_kind(), &config.values)?;
    let exports = Exports::with_defaults();
    exports.call(&config.export, &mut seq)?;
    render(&seq, config.format)
}
