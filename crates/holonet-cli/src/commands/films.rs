//! Films command handler.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use holonet_cli::output::{write_films, write_films_json, OutputFormat};
use holonet_cli::terminal::ColorPalette;
use holonet_lib::Holonet;

/// List the film catalog in episode order.
pub async fn handle_films(engine: &Holonet, format: OutputFormat) -> Result<ExitCode> {
    let catalog = engine
        .load_film_catalog()
        .await
        .context("failed to load the film catalog")?;

    let mut out = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => write_films(&mut out, catalog.films(), &ColorPalette::detect()),
        OutputFormat::Json => write_films_json(&mut out, catalog.films()),
    };
    written.context("failed to write output")?;

    Ok(ExitCode::SUCCESS)
}
