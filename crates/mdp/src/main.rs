//! mdp CLI - Markdown previewer.
//!
//! Provides commands for:
//! - `render`: Convert a markdown file to an HTML fragment or document
//! - `export`: Write a standalone HTML document to the export directory
//! - `count`: Count the words of a markdown file

mod commands;
mod document;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CountArgs, ExportArgs, RenderArgs};
use output::Output;

/// mdp - Markdown previewer.
#[derive(Parser)]
#[command(name = "mdp", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to HTML.
    Render(RenderArgs),
    /// Export markdown as a standalone HTML document.
    Export(ExportArgs),
    /// Count the words of a markdown file.
    Count(CountArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Export(args) => args.execute(&output).map(|_| ()),
        Commands::Count(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
