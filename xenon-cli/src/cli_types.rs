//! Command-line argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xenon")]
#[command(about = "Enrich and export the Xbox 360 game catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Merge translations and listing data into the catalog JSON
    Enrich {
        /// Game catalog JSON file
        #[arg(long, default_value = "xbox360_games.json")]
        games: PathBuf,

        /// Title translation JSON file
        #[arg(long, default_value = "xbox_translations.json")]
        translations: PathBuf,

        /// Tab-delimited listing file (repeatable)
        #[arg(
            short,
            long = "listing",
            default_values_os_t = [PathBuf::from("xbox360.txt"), PathBuf::from("xbox360live.txt")]
        )]
        listings: Vec<PathBuf>,

        /// Output catalog JSON file
        #[arg(short, long, default_value = "xbox360_games_updated.json")]
        output: PathBuf,

        /// Copy the input catalog to a backup file before writing
        #[arg(long)]
        backup: bool,
    },

    /// Import the enriched catalog into a SQLite database
    Import {
        /// Enriched catalog JSON file
        #[arg(long, default_value = "xbox360_games_updated.json")]
        games: PathBuf,

        /// SQLite database path
        #[arg(long, default_value = "xbox_games.db")]
        db: PathBuf,

        /// Rows to show in the post-import sample
        #[arg(long, default_value_t = 10)]
        sample: usize,
    },

    /// Generate Aurora Lua category filters from the listings
    Filters {
        /// Tab-delimited listing file (repeatable)
        #[arg(
            short,
            long = "listing",
            default_values_os_t = [PathBuf::from("xbox360.txt"), PathBuf::from("xbox360live.txt")]
        )]
        listings: Vec<PathBuf>,

        /// Directory for the generated .lua files
        #[arg(long, default_value = "lua")]
        out_dir: PathBuf,

        /// Genre summary output file
        #[arg(long, default_value = "genres.txt")]
        genres: PathBuf,
    },

    /// Report statistics over an enriched catalog
    Analyze {
        /// Enriched catalog JSON file
        #[arg(long, default_value = "xbox360_games_updated.json")]
        games: PathBuf,

        /// Title translation JSON file
        #[arg(long, default_value = "xbox_translations.json")]
        translations: PathBuf,
    },
}
