//! Portfolio CLI
//!
//! Runs the certificate gallery pipeline against local files, for editing
//! `certificates-config.json` without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a certificate config, listing dropped records
//! portfolio check certificates/certificates-config.json
//!
//! # Same, as JSON
//! portfolio check certificates/certificates-config.json --json
//!
//! # Print the gallery markup the site would render
//! portfolio render certificates/certificates-config.json
//!
//! # Show the effective site configuration
//! portfolio config --config portfolio.json
//! ```

mod files;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::certificate::{collect, parse_document};
use portfolio_core::logging::LoggingBuilder;
use portfolio_core::{GalleryRenderer, GalleryView, PortfolioConfig};
use tracing::Level;

use files::{BufferSurface, FileConfigSource};

/// Portfolio site tooling
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Validate and preview the portfolio certificate gallery")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a certificates config file
    Check {
        /// Path to certificates-config.json
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the gallery markup for a certificates config file
    Render {
        /// Path to certificates-config.json
        file: PathBuf,

        /// Write markup here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective site configuration
    Config {
        /// JSON file overriding the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    LoggingBuilder::new(level).init(std::io::stderr)?;

    match cli.command {
        Commands::Check { file, json } => check(&file, json),
        Commands::Render { file, output } => render(&file, output.as_deref()).await,
        Commands::Config { config } => show_config(config.as_deref()),
    }
}

fn check(file: &Path, json: bool) -> Result<()> {
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records = parse_document(&body)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let Some(records) = records else {
        if json {
            println!("{}", serde_json::json!({ "certificates": [], "dropped": [], "missing_list": true }));
        } else {
            println!("No `certificates` list found; the gallery will show the empty state.");
        }
        return Ok(());
    };

    let collection = collect(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    println!("Certificates: {} valid, {} dropped", collection.certificates.len(), collection.dropped.len());
    for cert in &collection.certificates {
        let date = cert.date.as_deref().map(|d| format!(" ({})", d)).unwrap_or_default();
        println!("  ✓ {} - {}{}", cert.name, cert.issuer, date);
    }
    for dropped in &collection.dropped {
        println!("  ✗ #{}: {}", dropped.index, dropped.reason);
    }
    if collection.is_empty() {
        println!("The gallery will show the empty state.");
    }

    Ok(())
}

async fn render(file: &Path, output: Option<&Path>) -> Result<()> {
    let (root, name) = match (file.parent(), file.file_name()) {
        (Some(parent), Some(name)) => (parent.to_path_buf(), name.to_string_lossy().into_owned()),
        _ => anyhow::bail!("Invalid config path: {}", file.display()),
    };

    let surface = BufferSurface::default();
    let gallery = GalleryRenderer::new(FileConfigSource::new(root), Some(surface), name);

    let view = gallery.initialize().await;
    let summary = match &view {
        Some(GalleryView::Populated { cards, .. }) => format!("{} certificate card(s)", cards),
        Some(GalleryView::Empty) => "empty state".to_string(),
        Some(GalleryView::Error { message }) => format!("error state: {}", message),
        Some(GalleryView::Loading) | None => "nothing rendered".to_string(),
    };
    tracing::info!("Rendered {}", summary);

    let (markup, revealed) = gallery
        .surface()
        .map(|s| (s.markup(), s.revealed()))
        .unwrap_or_default();
    tracing::debug!(revealed, "Cards scheduled for reveal");
    match output {
        Some(path) => {
            std::fs::write(path, &markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} to {}", summary, path.display());
        }
        None => print!("{}", markup),
    }

    Ok(())
}

fn show_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            PortfolioConfig::from_json(&json)
                .with_context(|| format!("Invalid config in {}", path.display()))?
        }
        None => PortfolioConfig::default(),
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
