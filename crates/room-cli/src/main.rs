//! `roomgap` CLI -- compute and query free-classroom tables from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compute the free-room table from timetable rows (JSON array of row objects)
//! roomgap compute -i lectures.json -o empty_rooms.csv
//!
//! # Same, stdin → stdout, as JSON, with a custom operating window
//! cat lectures.json | roomgap compute --format json --config window.json
//!
//! # Rooms in B동 free on Monday from 09:30 to 18:00
//! roomgap query -i empty_rooms.csv --day 월 --from 0930 --to 1800 --building B동
//!
//! # Show how a single description is parsed
//! roomgap parse "월[1~2] 09:00~10:15 (B동201, B동202)"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use room_engine::export::parse_time;
use room_engine::{
    find_empty_rooms, from_csv, parse_description, rows_from_json, to_csv, ExportRow, RoomQuery,
    SchedulerConfig,
};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roomgap",
    version,
    about = "Free classroom finder for lecture timetables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free-room table from timetable rows
    Compute {
        /// Input JSON file with an array of row objects (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// JSON configuration file overriding the defaults
        #[arg(long)]
        config: Option<String>,
    },
    /// Find rooms free for a whole time span
    Query {
        /// Free-room table in CSV, as written by `compute` (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Weekday symbol, e.g. 월
        #[arg(long)]
        day: String,
        /// Span start, HHMM or HH:MM
        #[arg(long)]
        from: String,
        /// Span end, HHMM or HH:MM
        #[arg(long)]
        to: String,
        /// Restrict to one building
        #[arg(long)]
        building: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Parse one time/room description and print its segments as JSON
    Parse {
        /// The description text
        description: String,
        /// JSON configuration file overriding the defaults
        #[arg(long)]
        config: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Compute {
            input,
            output,
            format,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let json = read_input(input.as_deref())?;

            let rows = rows_from_json(&json, &config).context("Failed to read timetable rows")?;
            info!(rows = rows.len(), "loaded timetable rows");

            let table = find_empty_rooms(&rows, &config)
                .context("Failed to compute free-room table")?;

            write_output(output.as_deref(), &render(&table, format)?)?;
        }
        Commands::Query {
            input,
            day,
            from,
            to,
            building,
            format,
        } => {
            let query = RoomQuery {
                day,
                from: parse_time(&from).with_context(|| format!("Invalid --from: {}", from))?,
                to: parse_time(&to).with_context(|| format!("Invalid --to: {}", to))?,
                building,
            };
            if query.from > query.to {
                anyhow::bail!("--from {} is after --to {}", from, to);
            }

            let text = read_input(input.as_deref())?;
            let table = from_csv(&text).context("Failed to read free-room table")?;
            let hits: Vec<ExportRow> = query.apply(&table).into_iter().cloned().collect();
            info!(matches = hits.len(), "query complete");

            write_output(None, &render(&hits, format)?)?;
        }
        Commands::Parse {
            description,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let tokens = parse_description(&description, &config)
                .context("Failed to parse description")?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            SchedulerConfig::from_json(&json)
                .with_context(|| format!("Invalid config file: {}", path))
        }
        None => Ok(SchedulerConfig::default()),
    }
}

fn render(rows: &[ExportRow], format: Format) -> Result<String> {
    Ok(match format {
        Format::Csv => to_csv(rows)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            json
        }
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
