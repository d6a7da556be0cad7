//! Lamina CLI - component API documentation generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod pages;

#[derive(Parser)]
#[command(name = "lamina")]
#[command(about = "Generates per-facet Markdown pages from a component API manifest")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation pages from a manifest
    Generate {
        /// Path to the manifest JSON (defaults to config or "api.json")
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output directory (defaults to config or "static/auto-generated")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Namespace prefix stripped from component tags
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Generate {
            manifest,
            output,
            prefix,
        } => {
            commands::generate::run(manifest, output, prefix)?;
        }
    }

    Ok(())
}
