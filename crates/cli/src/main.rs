use anyhow::{Context, Result};
use artifact_store::{ArtifactRole, ArtifactStore};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{build_router, AppState, PredictionOrchestrator, Recommendation};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// ReelOracle - Movie Prediction Front-End
#[derive(Parser)]
#[command(name = "reel-oracle")]
#[command(about = "Movie prediction front-end backed by pre-trained artifacts", long_about = None)]
struct Cli {
    /// Path to the directory holding the serialized model artifacts
    #[arg(short, long, default_value = ".")]
    artifact_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prediction web UI over HTTP
    Serve {
        /// Address to bind the HTTP server to
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },

    /// Run a single prediction without starting the server
    Recommend {
        /// Prediction branch: "Hero" or "Genre"
        #[arg(long)]
        choice: String,

        /// Hero name or genre to predict from
        #[arg(long)]
        query: String,
    },

    /// Show which artifacts the store could load
    Artifacts,
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

    // Open the artifact store. Absent or corrupt artifacts are logged and the
    // affected operations fail per-request, so a partial bundle still starts.
    println!("Loading artifacts from {}...", cli.artifact_dir.display());
    let start = Instant::now();
    let store = Arc::new(ArtifactStore::open(&cli.artifact_dir));
    println!(
        "{} Loaded {}/{} artifacts in {:?}",
        "✓".green(),
        store.loaded_count(),
        ArtifactRole::ALL.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { addr } => handle_serve(store, addr).await?,
        Commands::Recommend { choice, query } => handle_recommend(store, &choice, &query)?,
        Commands::Artifacts => handle_artifacts(&store),
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(store: Arc<ArtifactStore>, addr: SocketAddr) -> Result<()> {
    for role in ArtifactRole::ALL {
        if !store.is_loaded(role) {
            warn!("{} is absent; requests that need it will fail", role);
        }
    }

    let app = build_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(store: Arc<ArtifactStore>, choice: &str, query: &str) -> Result<()> {
    let orchestrator = PredictionOrchestrator::new(store);
    let recommendation = orchestrator
        .recommend(choice, query)
        .with_context(|| format!("No prediction for '{}'", query))?;

    print_recommendation(&recommendation);
    Ok(())
}

/// Handle the 'artifacts' command
fn handle_artifacts(store: &ArtifactStore) {
    println!("{}", "Artifact status:\n".bold().blue());
    for role in ArtifactRole::ALL {
        let status = if store.is_loaded(role) {
            "loaded".green()
        } else {
            "absent".red()
        };
        println!("  {:<26} {:<16} {}", role.to_string(), role.file_name(), status);
    }
}

/// Helper function to format and print a prediction result
fn print_recommendation(recommendation: &Recommendation) {
    print!(
        "{}",
        format!("Predicted movie: {}\n", recommendation.movie)
            .bold()
            .blue()
    );
    if let Some(budget) = recommendation.budget {
        println!("{}Budget: ${:.0}", "• ".green(), budget);
    }
    if let Some(revenue) = recommendation.revenue {
        println!("{}Revenue: ${:.0}", "• ".green(), revenue);
    }
    if let Some(vote_count) = recommendation.vote_count {
        println!("{}Vote count: {:.0}", "• ".green(), vote_count);
    }
    if let Some(runtime) = recommendation.runtime {
        println!("{}Runtime: {:.0} min", "• ".cyan(), runtime);
    }
    if let Some(actor) = &recommendation.actor {
        println!("{}Lead actor: {}", "• ".cyan(), actor);
    }
}
