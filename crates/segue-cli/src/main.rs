//! Segue CLI - record song transitions and analyze the resulting graph.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;
mod config;

use commands::list::OutputFormat;
use config::Config;
use segue_engine::SegueEngine;

/// Segue: a personal song-transition graph.
///
/// Transitions are appended to a local SQLite log; the graph is rebuilt
/// from it on every invocation.
#[derive(Parser, Debug)]
#[command(
    name = "sg",
    author,
    version,
    about = "Segue: record song transitions and analyze the graph",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path of the transition database (overrides config and SEGUE_DB).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a transition between two songs.
    Add {
        /// Artist of the song transitioned from.
        #[arg(long)]
        from_artist: String,

        /// Title of the song transitioned from.
        #[arg(long)]
        from_title: String,

        /// Artist of the song transitioned to.
        #[arg(long)]
        to_artist: String,

        /// Title of the song transitioned to.
        #[arg(long)]
        to_title: String,

        /// Free-text note about the transition.
        #[arg(long)]
        note: Option<String>,
    },

    /// List all stored transitions in id order.
    List {
        /// Output format: table or json.
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show the weakly-connected components of the graph.
    Components,

    /// Show the longest simple path through the graph.
    Longest {
        /// Cap the number of paths the exhaustive search enumerates.
        #[arg(long)]
        max_paths: Option<usize>,
    },

    /// Export the longest path and its notes to a text file.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "longest_path.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = Config::load()?;
    let db_path = cli.db.unwrap_or(config.db_path);
    let mut engine = SegueEngine::open(&db_path)?;

    match cli.command {
        Commands::Add {
            from_artist,
            from_title,
            to_artist,
            to_title,
            note,
        } => commands::add::execute(
            &mut engine,
            &from_artist,
            &from_title,
            &to_artist,
            &to_title,
            note.as_deref(),
        ),
        Commands::List { format } => {
            let format: OutputFormat = format.parse()?;
            commands::list::execute(&engine, format)
        }
        Commands::Components => commands::components::execute(&engine),
        Commands::Longest { max_paths } => commands::longest::execute(&engine, max_paths),
        Commands::Export { output } => commands::export::execute(&engine, &output),
    }
}
