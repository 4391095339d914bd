//! Species census command handler.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use holonet_cli::output::{write_census, write_json, OutputFormat};
use holonet_cli::terminal::ColorPalette;
use holonet_lib::Holonet;

use super::report_empty;

/// Print the species census of the film titled `title`.
pub async fn handle_species(engine: &Holonet, title: &str, format: OutputFormat) -> Result<ExitCode> {
    let catalog = engine
        .load_film_catalog()
        .await
        .context("failed to load the film catalog")?;

    let census = match engine.census_for_film(&catalog, title).await {
        Ok(census) => census,
        Err(err) if err.is_empty_outcome() => return report_empty(err, format),
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to build the species census for '{title}'")));
        }
    };

    let mut out = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => write_census(&mut out, &census, &ColorPalette::detect()),
        OutputFormat::Json => write_json(&mut out, &census),
    };
    written.context("failed to write output")?;

    Ok(ExitCode::SUCCESS)
}
