//! xenon CLI
//!
//! Command-line tools for enriching the Xbox 360 game catalog with
//! Chinese title translations and listing metadata, and exporting it
//! as JSON, SQLite, or Aurora Lua filters.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Enrich {
            games,
            translations,
            listings,
            output,
            backup,
        } => commands::enrich::run_enrich(games, translations, listings, output, backup),
        Commands::Import { games, db, sample } => commands::import::run_import(games, db, sample),
        Commands::Filters {
            listings,
            out_dir,
            genres,
        } => commands::filters::run_filters(listings, out_dir, genres),
        Commands::Analyze {
            games,
            translations,
        } => commands::analyze::run_analyze(games, translations),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let default = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
