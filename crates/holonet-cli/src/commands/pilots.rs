//! Pilots command handler.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use holonet_cli::output::{write_json, write_pilot_searches, OutputFormat, PilotSearch};
use holonet_cli::terminal::ColorPalette;
use holonet_lib::{Collection, Holonet, SearchHistory};

/// Look up the pilot roster for each query in turn.
///
/// A query that matches nothing is reported inline and the remaining queries
/// still run. Successful queries feed the recent-search list printed last.
pub async fn handle_pilots(
    engine: &Holonet,
    queries: &[String],
    collection: Collection,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut history = SearchHistory::default();
    let mut searches = Vec::with_capacity(queries.len());

    for query in queries {
        match engine.find_pilots_in(collection, query).await {
            Ok(roster) => {
                history.record(query);
                searches.push(PilotSearch::found(query, roster));
            }
            Err(err) if err.is_empty_outcome() => {
                debug!(%query, "no match");
                searches.push(PilotSearch::empty(query, err.to_string()));
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("failed to look up pilots for '{query}'")));
            }
        }
    }

    let recent: Vec<String> = history.terms().map(str::to_string).collect();
    let mut out = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => {
            write_pilot_searches(&mut out, &searches, &recent, &ColorPalette::detect())
        }
        OutputFormat::Json => write_json(
            &mut out,
            &serde_json::json!({ "searches": searches, "recent": recent }),
        ),
    };
    written.context("failed to write output")?;

    Ok(ExitCode::SUCCESS)
}
