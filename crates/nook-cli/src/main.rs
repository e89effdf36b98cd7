//! Nook CLI - headless access to the command palette and search routes

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::load_settings;
use crate::commands::completions::run_completions;
use crate::commands::palette::run_palette;
use crate::commands::route::run_route;
use crate::commands::search::run_search;
use crate::commands::settings::run_settings;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` directives plus warnings from our own crates
fn log_filter(base: EnvFilter) -> EnvFilter {
    match "nook=warn".parse() {
        Ok(directive) => base.add_directive(directive),
        Err(_) => base,
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Palette {
            query,
            select,
            json,
        }) => {
            let output = run_palette(&query.join(" "), select, json)?;
            print!("{output}");
        }
        Some(Commands::Search { query, ask }) => {
            let settings = load_settings(cli.settings)?;
            println!("{}", run_search(&query.join(" "), ask, &settings)?);
        }
        Some(Commands::Route { path, json }) => print!("{}", run_route(&path, json)?),
        Some(Commands::Settings { json }) => {
            let settings = load_settings(cli.settings)?;
            print!("{}", run_settings(&settings, json)?);
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
