// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments, builds the
// engine, and dispatches here.

pub mod films;
pub mod pilots;
pub mod planets;
pub mod species;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use holonet_cli::output::{write_notice, write_notice_json, OutputFormat};
use holonet_cli::terminal::ColorPalette;
use holonet_lib::Error as LibError;

/// Report an empty outcome (nothing matched) and exit unsuccessfully.
///
/// Faults are not empty outcomes and are returned to the caller unchanged.
pub fn report_empty(err: LibError, format: OutputFormat) -> Result<ExitCode> {
    if !err.is_empty_outcome() {
        return Err(err.into());
    }
    let message = capitalize(&err.to_string());
    let mut out = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => write_notice(&mut out, &message, &ColorPalette::detect()),
        OutputFormat::Json => write_notice_json(&mut out, &message),
    };
    written.context("failed to write output")?;
    Ok(ExitCode::FAILURE)
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
