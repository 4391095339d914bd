//! Output formatting for command results.
//!
//! Renderers write to any [`Write`] so commands hand them a locked stdout and
//! tests hand them a buffer. Text renderers take a [`ColorPalette`]; JSON
//! renderers never emit color.

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use holonet_lib::{
    format_population, parse_population, population_level, ClimateKind, Film, PilotRoster, Planet,
    SpeciesCensus,
};

use crate::terminal::{level_bar, ColorPalette, TerminalCaps};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly tables.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when Unicode is detected and falls back to
/// ASCII otherwise.
pub fn print_logo(caps: TerminalCaps) {
    let p = caps.palette();
    let (orange, cyan, reset) = (p.orange, p.cyan, p.reset);

    if caps.unicode {
        println!(
            "{cyan}╭───────────────────────────────╮{reset}
{cyan}│{orange} ░█░█░█▀█░█░░░█▀█░█▀█░█▀▀░▀█▀░ {cyan}│{reset}
{cyan}│{orange} ░█▀█░█░█░█░░░█░█░█░█░█▀▀░░█░░ {cyan}│{reset}
{cyan}│{orange} ░▀░▀░▀▀▀░▀▀▀░▀▀▀░▀░▀░▀▀▀░░▀░░ {cyan}│{reset}
{cyan}├───────────────────────────────┤{reset}
{cyan}│{orange}           [ C L I ]           {cyan}│{reset}
{cyan}╰───────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+-------------------------------+
|  HOLONET                      |
|  >> GALACTIC CATALOG BROWSER  |
+-------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration, p: &ColorPalette) {
    println!("\n{}Completed in {}{}", p.gray, format_elapsed(elapsed), p.reset);
}

fn format_elapsed(elapsed: Duration) -> String {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, S: Serialize + ?Sized>(out: &mut W, value: &S) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Result of one pilot lookup inside a `pilots` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct PilotSearch {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<PilotRoster>,
    /// Friendly explanation when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PilotSearch {
    pub fn found(query: &str, roster: PilotRoster) -> Self {
        Self {
            query: query.to_string(),
            roster: Some(roster),
            message: None,
        }
    }

    pub fn empty(query: &str, message: impl Into<String>) -> Self {
        Self {
            query: query.to_string(),
            roster: None,
            message: Some(message.into()),
        }
    }
}

/// Render pilot lookups followed by the recent-search list.
pub fn write_pilot_searches<W: Write>(
    out: &mut W,
    searches: &[PilotSearch],
    recent: &[String],
    p: &ColorPalette,
) -> io::Result<()> {
    for search in searches {
        match (&search.roster, &search.message) {
            (Some(roster), _) => {
                let vehicle = &roster.vehicle;
                writeln!(
                    out,
                    "{}{}{} {}({}){}",
                    p.white_bold, vehicle.name, p.reset, p.gray, vehicle.class, p.reset
                )?;
                if roster.pilots.is_empty() {
                    writeln!(out, "  {}no registered pilots{}", p.gray, p.reset)?;
                }
                for pilot in &roster.pilots {
                    writeln!(out, "  - {}", pilot.name)?;
                }
            }
            (None, message) => {
                let message = message.as_deref().unwrap_or("no match");
                writeln!(out, "{}{}{}", p.red, message, p.reset)?;
            }
        }
    }

    if !recent.is_empty() {
        writeln!(
            out,
            "\n{}Recent searches:{} {}",
            p.gray,
            p.reset,
            recent.join(", ")
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct FilmRow<'a> {
    episode_id: u32,
    title: &'a str,
    director: &'a str,
    release_date: &'a str,
    characters: usize,
}

impl<'a> From<&'a Film> for FilmRow<'a> {
    fn from(film: &'a Film) -> Self {
        Self {
            episode_id: film.episode_id,
            title: &film.title,
            director: &film.director,
            release_date: &film.release_date,
            characters: film.characters.len(),
        }
    }
}

/// Render the film catalog in the order given.
pub fn write_films<W: Write>(out: &mut W, films: &[Film], p: &ColorPalette) -> io::Result<()> {
    writeln!(out, "{} FILMS {} ({})", p.tag_heading, p.reset, films.len())?;
    for film in films {
        writeln!(
            out,
            "  Episode {:<2} {}{}{} {}({}, {} characters){}",
            film.episode_id,
            p.white_bold,
            film.title,
            p.reset,
            p.gray,
            film.release_date,
            film.characters.len(),
            p.reset
        )?;
    }
    Ok(())
}

pub fn write_films_json<W: Write>(out: &mut W, films: &[Film]) -> io::Result<()> {
    let rows: Vec<FilmRow<'_>> = films.iter().map(FilmRow::from).collect();
    write_json(out, &rows)
}

/// Render a species census as a table, largest group first.
pub fn write_census<W: Write>(
    out: &mut W,
    census: &SpeciesCensus,
    p: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{} SPECIES {} {}{}{} {}(episode {}, {} characters){}",
        p.tag_heading,
        p.reset,
        p.white_bold,
        census.film_title,
        p.reset,
        p.gray,
        census.episode_id,
        census.total_characters,
        p.reset
    )?;

    if census.groups.is_empty() {
        writeln!(out, "  {}no characters are listed{}", p.gray, p.reset)?;
        return Ok(());
    }

    let width = census
        .groups
        .iter()
        .map(|g| g.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Species".len());
    writeln!(
        out,
        "  {:<width$}  {:>5}  {:>6}  Characters",
        "Species", "Count", "Share"
    )?;
    for group in &census.groups {
        writeln!(
            out,
            "  {:<width$}  {:>5}  {}{:>5.1}%{}  {}",
            group.name,
            group.count,
            p.yellow,
            group.percentage,
            p.reset,
            group.characters.join(", ")
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct PlanetRow<'a> {
    name: &'a str,
    population: Option<f64>,
    population_label: String,
    population_level: u8,
    climate: &'a str,
    climate_kind: ClimateKind,
    terrain: &'a str,
}

impl<'a> From<&'a Planet> for PlanetRow<'a> {
    fn from(planet: &'a Planet) -> Self {
        Self {
            name: &planet.name,
            population: parse_population(&planet.population),
            population_label: format_population(&planet.population),
            population_level: population_level(&planet.population),
            climate: &planet.climate,
            climate_kind: ClimateKind::classify(&planet.climate),
            terrain: &planet.terrain,
        }
    }
}

fn climate_color(kind: ClimateKind, p: &ColorPalette) -> &'static str {
    match kind {
        ClimateKind::Arid => p.orange,
        ClimateKind::Temperate => p.green,
        ClimateKind::Tropical => p.yellow,
        ClimateKind::Frozen => p.cyan,
        ClimateKind::Other => p.gray,
    }
}

/// Render a planet listing with population bars and climate tags.
pub fn write_planets<W: Write>(
    out: &mut W,
    planets: &[&Planet],
    total: usize,
    p: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{} PLANETS {} ({} of {})",
        p.tag_heading,
        p.reset,
        planets.len(),
        total
    )?;
    let width = planets
        .iter()
        .map(|planet| planet.name.chars().count())
        .max()
        .unwrap_or(0);
    for planet in planets {
        let row = PlanetRow::from(*planet);
        writeln!(
            out,
            "  {:<width$}  {:>8}  {}{}{}  {}{}{}",
            row.name,
            row.population_label,
            p.green,
            level_bar(row.population_level),
            p.reset,
            climate_color(row.climate_kind, p),
            row.climate_kind.label(),
            p.reset
        )?;
    }
    Ok(())
}

pub fn write_planets_json<W: Write>(out: &mut W, planets: &[&Planet]) -> io::Result<()> {
    let rows: Vec<PlanetRow<'_>> = planets.iter().map(|planet| PlanetRow::from(*planet)).collect();
    write_json(out, &rows)
}

/// Render the most populated planet.
pub fn write_most_populated<W: Write>(
    out: &mut W,
    planet: &Planet,
    p: &ColorPalette,
) -> io::Result<()> {
    let exact = parse_population(&planet.population)
        .map(headcount)
        .unwrap_or_else(|| planet.population.clone());
    writeln!(
        out,
        "Most populated planet: {}{}{} with {} inhabitants {}({}){}",
        p.white_bold,
        planet.name,
        p.reset,
        exact,
        p.gray,
        format_population(&planet.population),
        p.reset
    )
}

/// Whole-number population with comma-grouped thousands.
fn headcount(population: f64) -> String {
    let digits = format!("{:.0}", population.max(0.0));
    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    grouped.push_str(&digits[..head]);
    for group in digits.as_bytes()[head..].chunks(3) {
        grouped.push(',');
        grouped.extend(group.iter().map(|&b| char::from(b)));
    }
    grouped
}

pub fn write_most_populated_json<W: Write>(out: &mut W, planet: &Planet) -> io::Result<()> {
    write_json(out, &PlanetRow::from(planet))
}

/// Friendly line for an empty outcome.
pub fn write_notice<W: Write>(out: &mut W, message: &str, p: &ColorPalette) -> io::Result<()> {
    writeln!(out, "{}{}{}", p.red, message, p.reset)
}

#[derive(Debug, Serialize)]
struct Notice<'a> {
    message: &'a str,
}

pub fn write_notice_json<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_json(out, &Notice { message })
}
