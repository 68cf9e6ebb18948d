//! cinefeed command line: run the interaction export or serve the
//! recommendation API.

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use catalog::TmdbClient;
use config::Config;
use exporter::export_interactions;
use server::{create_router, AppState};
use store::{FsScoreStore, PgWatchlistStore};

/// cinefeed - implicit-feedback movie recommendations
#[derive(Parser)]
#[command(name = "cinefeed")]
#[command(about = "Movie recommendation pipeline: export training data, serve recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export watchlist interactions as an implicit-feedback matrix file
    Export {
        /// Output path for the matrix file
        #[arg(short, long, default_value = "data/implicit.txt")]
        output: PathBuf,
    },

    /// Serve the recommendation API
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Export { output } => handle_export(config, output).await?,
        Commands::Serve => handle_serve(config).await?,
    }

    Ok(())
}

/// Handle the 'export' command
async fn handle_export(config: Config, output: PathBuf) -> Result<()> {
    let start = Instant::now();
    let store = PgWatchlistStore::connect(&config.database_url)
        .await
        .context("Failed to connect to the watchlist database")?;

    let summary = export_interactions(&store, &output).await?;

    println!(
        "{} Exported {} interactions ({} users, {} movies) to {} in {:?}",
        "✓".green(),
        summary.interactions,
        summary.users,
        summary.items,
        output.display(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(config: Config) -> Result<()> {
    let api_key = config
        .tmdb_api_key
        .clone()
        .context("TMDB_API_KEY must be set to serve recommendations")?;

    let watchlist = PgWatchlistStore::connect(&config.database_url)
        .await
        .context("Failed to connect to the watchlist database")?;
    let scores = FsScoreStore::new(config.recs_dir.clone());
    let catalog = TmdbClient::new(api_key, config.tmdb_base_url.clone());

    let state = AppState::new(Arc::new(watchlist), Arc::new(scores), Arc::new(catalog));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "recommendation API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
