mod commands;

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use holonet_cli::logging::{init_logging, LoggingConfig};
use holonet_cli::output::{print_footer, print_logo, OutputFormat};
use holonet_cli::terminal::TerminalCaps;
use holonet_lib::{ClientConfig, Collection, Holonet};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse and aggregate the Holonet film catalog")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// API root to query (overrides HOLONET_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Maximum concurrent reference fetches (overrides HOLONET_MAX_IN_FLIGHT).
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    max_in_flight: Option<u16>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the banner and timing footer.
    #[arg(long, global = true)]
    no_logo: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show who pilots the first vehicle matching each query.
    Pilots {
        /// One or more search terms, looked up in order.
        #[arg(required = true)]
        queries: Vec<String>,
        /// Search ground vehicles instead of starships.
        #[arg(long)]
        vehicles: bool,
    },
    /// List films in episode order.
    Films,
    /// Break down a film's characters by species.
    Species {
        /// Exact film title.
        title: String,
    },
    /// List planets with population and climate.
    Planets {
        /// Only show planets whose name, climate, or terrain contains this term.
        #[arg(long)]
        search: Option<String>,
    },
    /// Find the planet with the largest known population.
    MostPopulated,
}

impl GlobalOptions {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("invalid HOLONET_* environment")?;
        if let Some(base_url) = &self.base_url {
            config = config
                .with_base_url(base_url)
                .with_context(|| format!("invalid --base-url {base_url}"))?;
        }
        if let Some(max_in_flight) = self.max_in_flight {
            config = config.with_max_in_flight(usize::from(max_in_flight));
        }
        Ok(config)
    }

    fn decorate(&self) -> bool {
        !self.no_logo && self.format == OutputFormat::Text
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let started = Instant::now();
    let caps = TerminalCaps::from_env();

    if cli.global.decorate() {
        print_logo(caps);
    }

    let config = cli.global.client_config()?;
    let engine = Holonet::new(config).context("failed to build the HTTP client")?;
    let format = cli.global.format;

    let code = match &cli.command {
        Command::Pilots { queries, vehicles } => {
            let collection = if *vehicles {
                Collection::Vehicles
            } else {
                Collection::Starships
            };
            commands::pilots::handle_pilots(&engine, queries, collection, format).await?
        }
        Command::Films => commands::films::handle_films(&engine, format).await?,
        Command::Species { title } => {
            commands::species::handle_species(&engine, title, format).await?
        }
        Command::Planets { search } => {
            commands::planets::handle_planets(&engine, search.as_deref(), format).await?
        }
        Command::MostPopulated => {
            commands::planets::handle_most_populated(&engine, format).await?
        }
    };

    if cli.global.decorate() {
        print_footer(started.elapsed(), &caps.palette());
    }
    Ok(code)
}
