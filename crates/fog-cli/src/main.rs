//! Fog CLI - layout inspection for the Fog out-of-core graph engine.
//!
//! Operators use it to check, before a run, how a graph descriptor and
//! memory budget resolve into segments, partitions, and buffers.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Fog segment layout inspection tool.
///
/// Plans segments and carves the memory budget exactly as the engine does at
/// startup, then prints the result.
#[derive(Parser)]
#[command(name = "fog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
    /// The engine's plain-text layout report
    Text,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Plan segments and carve the memory region
    Layout {
        /// Path to the graph descriptor (JSON)
        descriptor: PathBuf,

        /// Size of one vertex attribute record in bytes
        #[arg(long)]
        attr_size: u64,

        /// Base address of the memory region (decimal or 0x-prefixed hex)
        #[arg(long, default_value = "0", value_parser = commands::parse_address)]
        base: u64,

        /// Size of the memory region in bytes [default: memory budget]
        #[arg(long)]
        region_size: Option<u64>,
    },

    /// Show which segment and unit own the given vertices
    Locate {
        /// Path to the graph descriptor (JSON)
        descriptor: PathBuf,

        /// Size of one vertex attribute record in bytes
        #[arg(long)]
        attr_size: u64,

        /// Vertex ids to locate
        #[arg(required = true)]
        vertices: Vec<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Layout {
            descriptor,
            attr_size,
            base,
            region_size,
        } => commands::layout::run(
            &descriptor,
            attr_size,
            base,
            region_size,
            cli.format,
            cli.quiet,
        ),
        Commands::Locate {
            descriptor,
            attr_size,
            vertices,
        } => commands::locate::run(&descriptor, attr_size, &vertices, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
