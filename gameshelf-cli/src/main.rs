//! gameshelf CLI
//!
//! Command-line interface for importing a Steam library and matching
//! it against the IGDB catalog.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gameshelf")]
#[command(about = "Import and match game libraries against the IGDB catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a Steam library and match it against the catalog
    Import {
        /// 64-bit Steam id of the profile to import
        steam_id: String,

        /// Maximum number of games to import
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the enriched entries as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog for a game by name
    Search {
        /// Name to search for
        query: String,
    },

    /// Manage API credentials configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current credentials and their sources
    Show,

    /// Interactively set up IGDB credentials
    Setup,

    /// Print the config file path
    Path,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            steam_id,
            limit,
            json,
        } => commands::import::run_import_command(&steam_id, limit, json),
        Commands::Search { query } => commands::search::run_search(&query),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Setup => commands::config::run_config_setup(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
