//! Topolab CLI - analyze and compare network topologies.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topolab::prelude::Archetype;
use tracing::Level;

#[derive(Parser)]
#[command(name = "topolab")]
#[command(author, version, about = "Topolab - network topology analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a topolab.toml in a directory
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Full report: shape, failure points, redundancy, issues and cost
    Analyze {
        /// Exported topology or bare {devices, connections} JSON
        file: PathBuf,
    },

    /// Name the shape of a topology
    Classify {
        /// Topology JSON file
        file: PathBuf,
    },

    /// Run the validation rules (fails if any error is found)
    Validate {
        /// Topology JSON file
        file: PathBuf,
    },

    /// Compare archetypes; naming one twice deselects it
    Compare {
        /// Archetypes to compare (default: star mesh)
        archetypes: Vec<Archetype>,
    },

    /// Estimate the cables an archetype needs
    Cables {
        /// Archetype, e.g. mesh or spine-and-leaf
        archetype: Archetype,

        /// Number of nodes
        #[arg(short, long, default_value = "4")]
        nodes: u64,
    },

    /// List builder templates
    Templates,

    /// Export a builder template as a topology file
    Template {
        /// Template id, e.g. small-office
        id: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path.as_deref()),
        Commands::Analyze { file } => commands::analyze::run(&file, cli.json),
        Commands::Classify { file } => commands::classify::run(&file, cli.json),
        Commands::Validate { file } => commands::validate::run(&file, cli.json),
        Commands::Compare { archetypes } => commands::compare::run(&archetypes, cli.json),
        Commands::Cables { archetype, nodes } => {
            commands::cables::run(archetype, nodes, cli.json)
        }
        Commands::Templates => commands::templates::list(cli.json),
        Commands::Template { id, output } => {
            commands::templates::export(&id, output.as_deref())
        }
    }
}
