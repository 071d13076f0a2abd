//! # Periodic Table CLI
//!
//! Terminal front end for `ptable_core`: prints the placed grid, shows an
//! element's card and properties, and opens its Wikipedia page.
//!
//! ## Usage
//!
//! ```text
//! ptable [--data PATH] [--log-level LEVEL] [COMMAND]
//!
//!   table                  Print the grid (default)
//!   show QUERY             Show one element (number, symbol, or name)
//!   wiki QUERY [--print]   Open the element's Wikipedia page
//!   json                   Dump all placements as JSON
//!   help                   Show help
//! ```
//!
//! Exits with 1 on I/O and lookup errors, 2 when the dataset itself is bad.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, LevelFilter};
use ptable_core::reference::wikipedia_url;
use ptable_core::{PeriodicTable, TableError, TableResult};

use crate::render::{render_details, render_grid};

/// Exit status for I/O, lookup, and browser errors
const EXIT_FAILURE: u8 = 1;

/// Exit status for errors in the dataset itself (bad group, duplicate, ...)
const EXIT_DATA_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "ptable",
    about = "Periodic Table - grid layout and element lookup",
    version,
)]
struct Cli {
    /// Load elements from a JSON file instead of the built-in set
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,
    /// Log level (off/error/warn/info/debug/trace); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, clap::Subcommand)]
enum Command {
    /// Print the periodic table grid (default)
    Table,
    /// Show an element by number, symbol, or name
    Show {
        query: String,
    },
    /// Open the element's Wikipedia page
    Wiki {
        query: String,
        /// Print the URL instead of opening a browser
        #[arg(long)]
        print: bool,
    },
    /// Dump all placed elements as JSON
    Json,
}

fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).try_init().ok();
}

fn load_table(cli: &Cli) -> TableResult<PeriodicTable> {
    match &cli.data {
        Some(path) => {
            info!("Loading elements from {}", path.display());
            PeriodicTable::load(path)
        }
        None => {
            debug!("Using built-in dataset");
            Ok(PeriodicTable::builtin())
        }
    }
}

fn run(cli: &Cli) -> TableResult<()> {
    let table = load_table(cli)?;

    match cli.command.as_ref().unwrap_or(&Command::Table) {
        Command::Table => print!("{}", render_grid(&table)),
        Command::Show { query } => print!("{}", render_details(table.find(query)?)),
        Command::Wiki { query, print } => {
            let url = wikipedia_url(&table.find(query)?.element);
            if *print {
                println!("{}", url);
            } else {
                info!("Opening {}", url);
                open::that(&url).map_err(|e| {
                    TableError::file_error("open in browser", &url, e.to_string())
                })?;
            }
        }
        Command::Json => {
            let json = serde_json::to_string_pretty(table.placed())?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn exit_status(error: &TableError) -> u8 {
    if error.is_data_error() {
        EXIT_DATA_ERROR
    } else {
        EXIT_FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(exit_status(&e))
        }
    }
}
