//! Planet listing and most-populated command handlers.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use holonet_cli::output::{
    write_most_populated, write_most_populated_json, write_notice, write_notice_json,
    write_planets, write_planets_json, OutputFormat,
};
use holonet_cli::terminal::ColorPalette;
use holonet_lib::Holonet;

use super::report_empty;

/// List planets, optionally filtered by a name/climate/terrain term.
pub async fn handle_planets(
    engine: &Holonet,
    search: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let catalog = engine
        .load_planet_catalog()
        .await
        .context("failed to load the planet catalog")?;
    let term = search.unwrap_or("");
    let planets = catalog.filter(term);

    let mut out = io::stdout().lock();
    let palette = ColorPalette::detect();
    if planets.is_empty() && !term.trim().is_empty() {
        let message = format!("No planets match '{}'.", term.trim());
        let written = match format {
            OutputFormat::Text => write_notice(&mut out, &message, &palette),
            OutputFormat::Json => write_notice_json(&mut out, &message),
        };
        written.context("failed to write output")?;
        return Ok(ExitCode::SUCCESS);
    }

    let written = match format {
        OutputFormat::Text => write_planets(&mut out, &planets, catalog.len(), &palette),
        OutputFormat::Json => write_planets_json(&mut out, &planets),
    };
    written.context("failed to write output")?;

    Ok(ExitCode::SUCCESS)
}

/// Report the planet with the largest known population.
pub async fn handle_most_populated(engine: &Holonet, format: OutputFormat) -> Result<ExitCode> {
    let planet = match engine.most_populated_planet().await {
        Ok(planet) => planet,
        Err(err) if err.is_empty_outcome() => return report_empty(err, format),
        Err(err) => {
            return Err(anyhow::Error::new(err).context("failed to scan the planet catalog"));
        }
    };

    let mut out = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => write_most_populated(&mut out, &planet, &ColorPalette::detect()),
        OutputFormat::Json => write_most_populated_json(&mut out, &planet),
    };
    written.context("failed to write output")?;

    Ok(ExitCode::SUCCESS)
}
