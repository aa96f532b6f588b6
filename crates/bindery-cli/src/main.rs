#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! Bindery CLI
//!
//! Command-line interface for publishing workshop materials.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bindery_site::{load_config, publish};

/// Bindery - workshop materials publishing tool
#[derive(Parser, Debug)]
#[command(name = "bindery")]
#[command(about = "Publish workshop notebooks and pages as a static site", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "BINDERY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Process all sections and build the site
    Publish {
        /// Override the configured output directory
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate the configuration without writing anything
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from("workshop-config.yaml"));
    let mut config = load_config(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    match args.command {
        Command::Publish { output } => {
            if let Some(output) = output {
                config.output_dir = output;
            }
            let stats = publish(&config, Path::new(".")).context("publish failed")?;
            println!(
                "Published {} items ({} notebooks, {} pages, {} data bundles, {} assets) to {}/",
                stats.items,
                stats.notebooks,
                stats.pages,
                stats.bundles,
                stats.assets_copied,
                config.output_dir
            );
        }
        Command::Check => {
            println!("config: {}", config_path.display());
            println!("title: {}", config.title);
            println!("output: {}/", config.output_dir);

            let sections = config.resolved_sections();
            if sections.is_empty() {
                println!("no sections configured");
            }
            for section in &sections {
                let status = if Path::new(&section.folder).is_dir() {
                    "ok"
                } else {
                    "missing"
                };
                println!("section '{}' -> {}/ [{status}]", section.title, section.folder);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
