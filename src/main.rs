//! pdfsort CLI
//!
//! Sorts the PDFs of an unprocessed folder into keyword folders.

use anyhow::{Context, Result};
use clap::Parser;
use pdfsort::{Config, LopdfSource, RuleEngine, RunOptions, TextSource};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pdfsort")]
#[command(author, version, about = "Sort PDFs into folders by first-page keywords")]
struct Cli {
    /// Path to config file (defaults to ./dictionary.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Classify the unprocessed folder (default)
    Run {
        /// Only report what would be moved
        #[arg(long)]
        dry_run: bool,
    },

    /// List all rules
    List,

    /// Validate config file
    Check,

    /// Print the text extracted from a PDF page
    Text {
        /// PDF file to read
        file: PathBuf,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = pdfsort::pdf::SEARCH_PAGE)]
        page: u32,
    },
}

fn run(config_path: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config = Config::load(config_path.as_deref()).context("Invalid configuration")?;
    let engine = RuleEngine::new(LopdfSource::new()).with_options(RunOptions { dry_run });

    let report = engine.run(&config)?;

    let verb = if dry_run { "would move" } else { "moved" };
    println!(
        "Done: {} {} file(s), {} conflict(s), {} error(s)",
        verb,
        report.move_count(),
        report.conflict_count(),
        report.error_count()
    );

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("PDFSORT_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        None => run(cli.config, false)?,
        Some(Commands::Run { dry_run }) => run(cli.config, dry_run)?,
        Some(Commands::List) => {
            let config = Config::load(cli.config.as_deref())?;
            println!("Base folder: {}", config.base_folder.display());
            println!("Rules:");
            for (i, rule) in config.matches.iter().enumerate() {
                println!(
                    "  [{}] '{}' -> {}",
                    i + 1,
                    rule.short_word,
                    rule.folder.display()
                );
            }
        }
        Some(Commands::Check) => match Config::load(cli.config.as_deref()) {
            Ok(config) => {
                println!("✓ Config is valid");
                println!("  {} rules", config.matches.len());
            }
            Err(e) => {
                eprintln!("✗ Config error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Text { file, page }) => {
            let text = LopdfSource::new().page_text(&file, page)?;
            println!("{}", text);
        }
    }

    Ok(())
}
