//! flixdeck - terminal movie/TV browse page backed by TMDB.

/// Application configuration (TOML).
mod config;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use crate::tui::run_browse;
use flixdeck_api::catalog::{Catalog, DataOrigin, FeaturedItem, RowQuery};
use flixdeck_api::tmdb::TmdbClient;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browse page.
    Browse,
    /// Print one carousel row for a heading.
    Row(RowArgs),
    /// Print the featured content of the hero pane.
    Featured,
}

/// Arguments for the `row` subcommand.
#[derive(clap::Args)]
struct RowArgs {
    /// Authored row heading. Unknown headings fall back to popular movies.
    #[arg(long)]
    heading: String,
}

/// Builds the catalog from config and environment.
///
/// The API key comes from the `TMDB_API_KEY` environment variable,
/// falling back to `api.key` in the config file.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client fails to
/// build.
#[instrument(skip_all)]
fn build_catalog(dir: Option<&PathBuf>) -> Result<(Catalog<TmdbClient>, AppConfig)> {
    let config_path = resolve_config_path(dir)?;
    let app_config = AppConfig::load(&config_path)?;
    if !config_path.exists() {
        app_config.save(&config_path)?;
        tracing::info!("wrote starter config to {}", config_path.display());
    }

    let api_key = match std::env::var("TMDB_API_KEY") {
        Ok(key) => key,
        Err(_) => app_config.api.key.clone().with_context(|| {
            format!(
                "no TMDB API key: set the TMDB_API_KEY environment variable \
                 or api.key in {}",
                config_path.display()
            )
        })?,
    };

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    // Base URL override for tests and proxies.
    if let Ok(base_url) = std::env::var("TMDB_API_BASE_URL") {
        let url = base_url
            .parse()
            .with_context(|| format!("invalid TMDB_API_BASE_URL: {base_url}"))?;
        builder = builder.base_url(url);
    }

    let client = builder.build().context("failed to build TMDB client")?;

    Ok((Catalog::new(client), app_config))
}

/// Runs the `browse` subcommand.
///
/// # Errors
///
/// Returns an error if catalog construction or the TUI fails.
#[instrument(skip_all)]
async fn run_browse_page(dir: Option<&PathBuf>) -> Result<()> {
    let (catalog, app_config) = build_catalog(dir)?;
    run_browse(Arc::new(catalog), app_config.page.rows).await
}

/// Runs the `row` subcommand.
///
/// # Errors
///
/// Returns an error if catalog construction fails.
#[instrument(skip_all)]
async fn run_row(args: &RowArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (catalog, _) = build_catalog(dir)?;

    let query = RowQuery::from_heading(&args.heading);
    let row = catalog.row(query).await;

    if let DataOrigin::Fallback { reason } = &row.origin {
        tracing::warn!("serving fallback data: {reason}");
    }

    tracing::info!("{} ({} items)", args.heading, row.data.len());
    for item in &row.data {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            item.id,
            item.rating,
            item.year,
            item.title
        );
    }
    Ok(())
}

/// Runs the `featured` subcommand.
///
/// # Errors
///
/// Returns an error if catalog construction fails.
#[instrument(skip_all)]
async fn run_featured(dir: Option<&PathBuf>) -> Result<()> {
    let (catalog, _) = build_catalog(dir)?;

    let featured = catalog.featured_content().await;
    if let DataOrigin::Fallback { reason } = &featured.origin {
        tracing::warn!("serving fallback data: {reason}");
    }
    print_featured(&featured.data);
    Ok(())
}

/// Logs the fields of a featured item.
fn print_featured(item: &FeaturedItem) {
    tracing::info!("{} ({})", item.title, item.year);
    tracing::info!(
        "{}  {}",
        item.rating,
        item.duration.as_deref().unwrap_or("-")
    );
    if !item.genres.is_empty() {
        tracing::info!("{}", item.genres.join(", "));
    }
    tracing::info!("{}", item.overview);
    if let Some(backdrop) = &item.backdrop {
        tracing::info!("backdrop: {backdrop}");
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse => run_browse_page(cli.dir.as_ref()).await,
        Commands::Row(args) => run_row(&args, cli.dir.as_ref()).await,
        Commands::Featured => run_featured(cli.dir.as_ref()).await,
    }
}
