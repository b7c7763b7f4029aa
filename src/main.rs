use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::overrides::ServerOverrides;
use database::{DbRepository, MemoryRepository, NoteRepository, connect, run_migrations};
use std::sync::Arc;

/// The main entry point for the notes service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings().context("Failed to load settings")?;
    // Keep the guard alive so buffered file logs are flushed on exit.
    let _log_guard = configuration::init_tracing(&settings.log)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            args.server.apply(&mut settings);
            handle_serve(args, settings).await
        }
        Commands::Migrate => handle_migrate(settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small JSON API for storing notes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations, then start the HTTP server.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate,
}

#[derive(Parser)]
struct ServeArgs {
    #[command(flatten)]
    server: ServerOverrides,

    /// Keep notes in process memory instead of PostgreSQL. Nothing is persisted.
    #[arg(long)]
    in_memory: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, settings: configuration::Settings) -> anyhow::Result<()> {
    let notes: Arc<dyn NoteRepository> = if args.in_memory {
        tracing::warn!("Running with in-memory storage; notes are lost on shutdown.");
        Arc::new(MemoryRepository::new())
    } else {
        let db_pool = connect(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        Arc::new(DbRepository::new(db_pool))
    };

    web_server::run_server(&settings, notes).await
}

async fn handle_migrate(settings: configuration::Settings) -> anyhow::Result<()> {
    let db_pool = connect(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Migrations applied.");
    Ok(())
}
